// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool call panel construction.
//!
//! Produces the following tree (classes abbreviated, `jp-ai-` prefix
//! omitted):
//!
//! ```text
//! details.tool-call.<container> [open]
//! ├── summary.tool-header
//! │   ├── div.tool-icon
//! │   ├── div.tool-title            tool name [+ span.tool-summary]
//! │   └── div.tool-status.<badge>   status label
//! └── div.tool-body
//!     ├── div.tool-section          "Input" + pre.tool-code > code
//!     ├── div.tool-approval-buttons (awaiting approval with both ids)
//!     └── div.tool-section          "Result" / "Error" (when output is set)
//! ```

use crate::approval::{ApprovalAction, ApprovalBinding, ApprovalHandle};
use crate::dom::Element;
use crate::metadata::ToolCallMetadata;
use crate::status::{status_label, ToolCallStatus};
use crate::translate::{NullTranslator, Translator};

/// Glyph shown at the start of every panel header.
pub const DEFAULT_ICON: &str = "⚡";

/// Collaborators needed to build a panel.
pub struct BuildContext<'a> {
    pub translator: &'a dyn Translator,
    pub approval: &'a ApprovalHandle,
    pub icon: &'a str,
}

impl<'a> BuildContext<'a> {
    pub fn new(translator: &'a dyn Translator, approval: &'a ApprovalHandle) -> Self {
        Self {
            translator,
            approval,
            icon: DEFAULT_ICON,
        }
    }

    pub fn with_icon(mut self, icon: &'a str) -> Self {
        self.icon = icon;
        self
    }

    /// Context with the identity translator.
    pub fn untranslated(approval: &'a ApprovalHandle) -> Self {
        Self::new(&NullTranslator, approval)
    }

    fn tr(&self, source: &str) -> String {
        self.translator.translate(source).into_owned()
    }
}

/// Build the panel for one tool call. The caller owns and mounts the result.
pub fn build_tool_call(metadata: &ToolCallMetadata, ctx: &BuildContext<'_>) -> Element {
    let presentation = metadata.status.presentation();

    let mut details = Element::new("details")
        .with_class("jp-ai-tool-call")
        .with_class(presentation.container_class);
    if presentation.open {
        details.set_attr("open", "true");
    }

    let header = build_header(metadata, presentation.status_class, ctx);

    let mut body = Element::new("div")
        .with_class("jp-ai-tool-body")
        .with_child(code_section(ctx.tr("Input"), &metadata.input));

    if let Some((target_id, approval_id)) = metadata.pending_approval() {
        body.append(build_approval_buttons(target_id, approval_id, ctx));
    }

    if let Some(output) = &metadata.output {
        let label = match metadata.status {
            ToolCallStatus::Error => ctx.tr("Error"),
            _ => ctx.tr("Result"),
        };
        body.append(code_section(label, output));
    }

    tracing::debug!(
        tool = %metadata.tool_name,
        status = %metadata.status,
        "built tool call panel"
    );

    details.with_child(header).with_child(body)
}

fn build_header(
    metadata: &ToolCallMetadata,
    status_class: &str,
    ctx: &BuildContext<'_>,
) -> Element {
    let icon = Element::new("div")
        .with_class("jp-ai-tool-icon")
        .with_text(ctx.icon);

    let mut title = Element::new("div")
        .with_class("jp-ai-tool-title")
        .with_text(metadata.tool_name.as_str());
    if let Some(summary) = metadata.summary.as_deref().filter(|s| !s.is_empty()) {
        title.append(
            Element::new("span")
                .with_class("jp-ai-tool-summary")
                .with_text(summary),
        );
    }

    let status = Element::new("div")
        .with_class("jp-ai-tool-status")
        .with_class(status_class)
        .with_text(status_label(metadata.status, ctx.translator));

    Element::new("summary")
        .with_class("jp-ai-tool-header")
        .with_child(icon)
        .with_child(title)
        .with_child(status)
}

fn code_section(label: String, content: &str) -> Element {
    Element::new("div")
        .with_class("jp-ai-tool-section")
        .with_child(
            Element::new("div")
                .with_class("jp-ai-tool-label")
                .with_text(label),
        )
        .with_child(
            Element::new("pre")
                .with_class("jp-ai-tool-code")
                .with_child(Element::new("code").with_text(content)),
        )
}

fn build_approval_buttons(
    target_id: &str,
    approval_id: &str,
    ctx: &BuildContext<'_>,
) -> Element {
    let approve = approval_button(
        ApprovalAction::approve(target_id, approval_id),
        "jp-ai-approval-approve",
        ctx.tr("Approve"),
        ctx.approval,
    );
    let reject = approval_button(
        ApprovalAction::reject(target_id, approval_id),
        "jp-ai-approval-reject",
        ctx.tr("Reject"),
        ctx.approval,
    );

    Element::new("div")
        .with_class("jp-ai-tool-approval-buttons")
        .with_class(format!("jp-ai-approval-id--{approval_id}"))
        .with_child(approve)
        .with_child(reject)
}

fn approval_button(
    action: ApprovalAction,
    class: &str,
    label: String,
    handle: &ApprovalHandle,
) -> Element {
    Element::new("button")
        .with_class("jp-ai-approval-btn")
        .with_class(class)
        .with_attr("data-target-id", action.target_id.as_str())
        .with_attr("data-approval-id", action.approval_id.as_str())
        .with_attr("data-approve", action.approve.to_string())
        .with_text(label)
        .with_on_click(ApprovalBinding::new(action, handle.clone()))
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
