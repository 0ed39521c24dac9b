// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Render adapter between the host's rendering model and the builder.

use std::future::{ready, Ready};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::approval::ApprovalHandle;
use crate::builder::{build_tool_call, BuildContext};
use crate::dom::Element;
use crate::metadata::{MetadataError, ToolCallMetadata};
use crate::translate::Translator;

/// Content identifier handled by this renderer.
pub const MIME_TYPE: &str = "application/vnd.jupyter.chat.components";

/// Class added to every renderer node.
pub const CLASS_NAME: &str = "jp-RenderedChatComponents";

/// Payload value selecting the tool call panel.
pub const TOOL_CALL: &str = "tool-call";

/// Per-render bundle supplied by the host.
///
/// Deserializes from a MIME bundle such as a notebook `display_data` output;
/// other keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderContext {
    #[serde(default)]
    pub data: Map<String, Value>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl RenderContext {
    pub fn tool_call(metadata: &ToolCallMetadata) -> Result<Self, serde_json::Error> {
        let mut data = Map::new();
        data.insert(MIME_TYPE.to_string(), Value::String(TOOL_CALL.to_string()));
        let metadata = match serde_json::to_value(metadata)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Ok(Self { data, metadata })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

/// Renderer for one output area.
///
/// Panels are appended to [`ComponentsRenderer::node`], a
/// `div.jp-RenderedChatComponents` owned by the renderer.
pub struct ComponentsRenderer {
    mime_type: String,
    translator: Arc<dyn Translator>,
    approval: ApprovalHandle,
    icon: String,
    node: Element,
}

impl ComponentsRenderer {
    pub fn new(
        mime_type: impl Into<String>,
        translator: Arc<dyn Translator>,
        approval: ApprovalHandle,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            mime_type: mime_type.into(),
            translator,
            approval,
            icon: icon.into(),
            node: Element::new("div").with_class(CLASS_NAME),
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn node(&self) -> &Element {
        &self.node
    }

    pub fn approval_handle(&self) -> &ApprovalHandle {
        &self.approval
    }

    /// Render `model` into this renderer's node.
    ///
    /// Work completes before returning; the future is always ready.
    pub fn render_model(&mut self, model: &RenderContext) -> Ready<Result<(), RenderError>> {
        ready(self.render_sync(model))
    }

    fn render_sync(&mut self, model: &RenderContext) -> Result<(), RenderError> {
        let payload = model.data.get(&self.mime_type).and_then(Value::as_str);
        if payload != Some(TOOL_CALL) {
            tracing::debug!(mime_type = %self.mime_type, ?payload, "skipping fragment");
            return Ok(());
        }

        let metadata = ToolCallMetadata::from_map(&model.metadata).inspect_err(|e| {
            tracing::warn!(error = %e, "rejecting tool call fragment");
        })?;

        let ctx =
            BuildContext::new(self.translator.as_ref(), &self.approval).with_icon(&self.icon);
        self.node.append(build_tool_call(&metadata, &ctx));
        Ok(())
    }
}

impl std::fmt::Debug for ComponentsRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentsRenderer")
            .field("mime_type", &self.mime_type)
            .field("approval", &self.approval)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
