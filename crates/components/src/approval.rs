// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Approval capability shared between the host and rendered controls.
//!
//! The host owns an [`ApprovalHandle`] and may set, replace or clear its
//! callback at any time. Controls keep a clone of the handle together with an
//! immutable [`ApprovalAction`], and read the callback from the handle when
//! they are clicked, so a callback installed after rendering is still used.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Host callback receiving `(target_id, approval_id, approve)`.
pub type ApprovalCallback = Arc<dyn Fn(&str, &str, bool) + Send + Sync>;

/// Decision carried by one approval control.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalAction {
    pub target_id: String,
    pub approval_id: String,
    pub approve: bool,
}

impl ApprovalAction {
    pub fn approve(target_id: impl Into<String>, approval_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            approval_id: approval_id.into(),
            approve: true,
        }
    }

    pub fn reject(target_id: impl Into<String>, approval_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            approval_id: approval_id.into(),
            approve: false,
        }
    }
}

/// Live cell holding the current approval callback, if any.
#[derive(Clone, Default)]
pub struct ApprovalHandle {
    callback: Arc<RwLock<Option<ApprovalCallback>>>,
}

impl ApprovalHandle {
    /// Create a handle with no callback installed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback<F>(callback: F) -> Self
    where
        F: Fn(&str, &str, bool) + Send + Sync + 'static,
    {
        let handle = Self::new();
        handle.set(callback);
        handle
    }

    /// Install or replace the callback.
    pub fn set<F>(&self, callback: F)
    where
        F: Fn(&str, &str, bool) + Send + Sync + 'static,
    {
        *self.callback.write() = Some(Arc::new(callback));
    }

    pub fn clear(&self) {
        *self.callback.write() = None;
    }

    pub fn is_set(&self) -> bool {
        self.callback.read().is_some()
    }

    /// Invoke the current callback with `action`.
    ///
    /// Returns `false` without doing anything when no callback is installed.
    pub fn invoke(&self, action: &ApprovalAction) -> bool {
        // Release the lock before calling out; the callback may replace itself.
        let callback = self.callback.read().clone();
        match callback {
            Some(callback) => {
                tracing::trace!(
                    target_id = %action.target_id,
                    approval_id = %action.approval_id,
                    approve = action.approve,
                    "invoking approval callback"
                );
                callback(&action.target_id, &action.approval_id, action.approve);
                true
            }
            None => {
                tracing::trace!(
                    approval_id = %action.approval_id,
                    "no approval callback installed"
                );
                false
            }
        }
    }

    /// Whether two handles share the same cell.
    pub fn same_cell(&self, other: &ApprovalHandle) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }
}

impl fmt::Debug for ApprovalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApprovalHandle")
            .field("is_set", &self.is_set())
            .finish()
    }
}

/// An [`ApprovalAction`] bound to the handle it is dispatched through.
#[derive(Clone, Debug)]
pub struct ApprovalBinding {
    pub action: ApprovalAction,
    pub handle: ApprovalHandle,
}

impl ApprovalBinding {
    pub fn new(action: ApprovalAction, handle: ApprovalHandle) -> Self {
        Self { action, handle }
    }

    pub fn dispatch(&self) -> bool {
        self.handle.invoke(&self.action)
    }
}

#[cfg(test)]
#[path = "approval_tests.rs"]
mod tests;
