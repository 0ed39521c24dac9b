// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Renderer factory registered with the host.

use std::sync::Arc;

use crate::approval::ApprovalHandle;
use crate::builder::DEFAULT_ICON;
use crate::config::{ConfigError, RendererConfig};
use crate::renderer::{ComponentsRenderer, MIME_TYPE};
use crate::translate::{NullTranslator, Translator};

/// Rank reported to the host unless configured otherwise.
pub const DEFAULT_RANK: u32 = 100;

/// Per-renderer options supplied by the host.
#[derive(Clone, Debug)]
pub struct RendererOptions {
    pub mime_type: String,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            mime_type: MIME_TYPE.to_string(),
        }
    }
}

/// Creates [`ComponentsRenderer`]s sharing one approval callback cell.
///
/// The callback may be installed or replaced at any time. Renderers read it
/// at click time, so renderers created before the change see the new one.
pub struct RendererFactory {
    mime_types: Vec<&'static str>,
    default_rank: u32,
    icon: String,
    translator: Arc<dyn Translator>,
    approval: ApprovalHandle,
}

impl Default for RendererFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererFactory {
    pub fn new() -> Self {
        Self {
            mime_types: vec![MIME_TYPE],
            default_rank: DEFAULT_RANK,
            icon: DEFAULT_ICON.to_string(),
            translator: Arc::new(NullTranslator),
            approval: ApprovalHandle::new(),
        }
    }

    pub fn from_config(config: &RendererConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = config.catalog()?;
        let mut factory = Self::new()
            .with_rank(config.default_rank)
            .with_icon(config.icon.clone());
        if !catalog.is_empty() {
            factory = factory.with_translator(Arc::new(catalog));
        }
        Ok(factory)
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.default_rank = rank;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Output contains only escaped text and statically defined handlers.
    pub fn safe(&self) -> bool {
        true
    }

    pub fn mime_types(&self) -> &[&'static str] {
        &self.mime_types
    }

    pub fn default_rank(&self) -> u32 {
        self.default_rank
    }

    pub fn approval_handle(&self) -> &ApprovalHandle {
        &self.approval
    }

    pub fn set_approval_callback<F>(&self, callback: F)
    where
        F: Fn(&str, &str, bool) + Send + Sync + 'static,
    {
        self.approval.set(callback);
    }

    pub fn clear_approval_callback(&self) {
        self.approval.clear();
    }

    pub fn create_renderer(&self, options: RendererOptions) -> ComponentsRenderer {
        ComponentsRenderer::new(
            options.mime_type,
            Arc::clone(&self.translator),
            self.approval.clone(),
            self.icon.clone(),
        )
    }
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;
