// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool call status and its presentation table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::translate::Translator;

/// Lifecycle status of a tool call, as reported by the producer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCallStatus {
    /// Tool is running
    Pending,
    /// Tool is waiting for the user to approve or reject it
    AwaitingApproval,
    /// Approved, execution in progress
    Approved,
    /// User rejected the call
    Rejected,
    /// Tool finished successfully
    Completed,
    /// Tool failed
    Error,
}

/// Visual treatment of a status.
///
/// Class names are opaque tags consumed by the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusPresentation {
    pub container_class: &'static str,
    pub status_class: &'static str,
    pub open: bool,
}

impl ToolCallStatus {
    pub const ALL: [ToolCallStatus; 6] = [
        Self::Pending,
        Self::AwaitingApproval,
        Self::Approved,
        Self::Rejected,
        Self::Completed,
        Self::Error,
    ];

    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::AwaitingApproval => "awaiting_approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }

    pub fn presentation(self) -> StatusPresentation {
        let (container_class, status_class, open) = match self {
            Self::Pending => ("jp-ai-tool-pending", "jp-ai-tool-status-pending", false),
            Self::AwaitingApproval => ("jp-ai-tool-pending", "jp-ai-tool-status-approval", true),
            Self::Approved => ("jp-ai-tool-pending", "jp-ai-tool-status-completed", false),
            Self::Rejected => ("jp-ai-tool-error", "jp-ai-tool-status-error", false),
            Self::Completed => ("jp-ai-tool-completed", "jp-ai-tool-status-completed", false),
            Self::Error => ("jp-ai-tool-error", "jp-ai-tool-status-error", false),
        };
        StatusPresentation {
            container_class,
            status_class,
            open,
        }
    }

    /// Untranslated badge text.
    pub fn label_source(self) -> &'static str {
        match self {
            Self::Pending => "Running...",
            Self::AwaitingApproval => "Awaiting Approval",
            Self::Approved => "Approved - Executing...",
            Self::Rejected => "Rejected",
            Self::Completed => "Completed",
            Self::Error => "Error",
        }
    }
}

/// Badge text for `status`, localized through `translator`.
pub fn status_label(status: ToolCallStatus, translator: &dyn Translator) -> String {
    translator.translate(status.label_source()).into_owned()
}

impl fmt::Display for ToolCallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool call status '{0}' (expected one of: pending, awaiting_approval, approved, rejected, completed, error)")]
pub struct ParseStatusError(pub String);

impl FromStr for ToolCallStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
