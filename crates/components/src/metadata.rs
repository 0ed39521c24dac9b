// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool call metadata carried alongside a `tool-call` payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::status::ToolCallStatus;

/// Render input describing one tool invocation.
///
/// Wire format is a flat object with camelCase keys. Keys not listed here are
/// ignored so hosts can attach their own metadata to the same fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallMetadata {
    pub tool_name: String,
    pub input: String,
    pub status: ToolCallStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_id: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("invalid tool call metadata: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl ToolCallMetadata {
    pub fn new(
        tool_name: impl Into<String>,
        input: impl Into<String>,
        status: ToolCallStatus,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            input: input.into(),
            status,
            summary: None,
            output: None,
            target_id: None,
            approval_id: None,
        }
    }

    /// Parse the metadata mapping of a rendered fragment.
    pub fn from_map(metadata: &Map<String, Value>) -> Result<Self, MetadataError> {
        Ok(serde_json::from_value(Value::Object(metadata.clone()))?)
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_approval(
        mut self,
        target_id: impl Into<String>,
        approval_id: impl Into<String>,
    ) -> Self {
        self.target_id = Some(target_id.into());
        self.approval_id = Some(approval_id.into());
        self
    }

    /// Target and approval ids when approval controls should be shown.
    ///
    /// Controls require the `awaiting_approval` status and both ids to be
    /// present and non-empty.
    pub fn pending_approval(&self) -> Option<(&str, &str)> {
        if self.status != ToolCallStatus::AwaitingApproval {
            return None;
        }
        let target_id = self.target_id.as_deref().filter(|s| !s.is_empty())?;
        let approval_id = self.approval_id.as_deref().filter(|s| !s.is_empty())?;
        Some((target_id, approval_id))
    }
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod tests;
