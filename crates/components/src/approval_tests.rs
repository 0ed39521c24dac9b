// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use parking_lot::Mutex;

type Calls = Arc<Mutex<Vec<(String, String, bool)>>>;

fn recording_handle() -> (ApprovalHandle, Calls) {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let handle = ApprovalHandle::with_callback(move |target, approval, approve| {
        sink.lock()
            .push((target.to_string(), approval.to_string(), approve));
    });
    (handle, calls)
}

#[test]
fn test_invoke_without_callback_is_noop() {
    let handle = ApprovalHandle::new();
    assert!(!handle.is_set());
    assert!(!handle.invoke(&ApprovalAction::approve("t1", "a1")));
}

#[test]
fn test_invoke_passes_action_fields() {
    let (handle, calls) = recording_handle();

    assert!(handle.invoke(&ApprovalAction::approve("t1", "a1")));
    assert!(handle.invoke(&ApprovalAction::reject("t2", "a2")));

    assert_eq!(
        *calls.lock(),
        vec![
            ("t1".to_string(), "a1".to_string(), true),
            ("t2".to_string(), "a2".to_string(), false),
        ]
    );
}

#[test]
fn test_clones_share_the_cell() {
    let handle = ApprovalHandle::new();
    let clone = handle.clone();
    assert!(handle.same_cell(&clone));
    assert!(!handle.same_cell(&ApprovalHandle::new()));

    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    handle.set(move |t, a, ok| sink.lock().push((t.into(), a.into(), ok)));

    assert!(clone.is_set());
    assert!(clone.invoke(&ApprovalAction::reject("t", "a")));
    assert_eq!(calls.lock().len(), 1);
}

#[test]
fn test_clear_removes_callback() {
    let (handle, calls) = recording_handle();
    handle.clear();

    assert!(!handle.invoke(&ApprovalAction::approve("t1", "a1")));
    assert!(calls.lock().is_empty());
}

#[test]
fn test_callback_may_replace_itself() {
    let handle = ApprovalHandle::new();
    let inner = handle.clone();
    handle.set(move |_, _, _| inner.clear());

    assert!(handle.invoke(&ApprovalAction::approve("t", "a")));
    assert!(!handle.is_set());
}

#[test]
fn test_binding_dispatches_bound_action() {
    let (handle, calls) = recording_handle();
    let binding = ApprovalBinding::new(ApprovalAction::reject("t9", "a9"), handle);

    assert!(binding.dispatch());
    assert_eq!(
        calls.lock().as_slice(),
        &[("t9".to_string(), "a9".to_string(), false)]
    );
}

#[test]
fn test_action_serializes_camel_case() {
    let json = serde_json::to_value(ApprovalAction::approve("t1", "a1")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "targetId": "t1", "approvalId": "a1", "approve": true })
    );
}
