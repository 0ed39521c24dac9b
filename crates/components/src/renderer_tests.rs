// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::status::ToolCallStatus;
use crate::translate::NullTranslator;
use serde_json::json;

fn renderer() -> ComponentsRenderer {
    ComponentsRenderer::new(MIME_TYPE, Arc::new(NullTranslator), ApprovalHandle::new(), "⚡")
}

fn context(value: Value) -> RenderContext {
    serde_json::from_value(value).unwrap()
}

fn render(renderer: &mut ComponentsRenderer, model: &RenderContext) -> Result<(), RenderError> {
    renderer.render_model(model).into_inner()
}

#[test]
fn test_node_has_class_name() {
    let renderer = renderer();
    assert_eq!(renderer.node().tag(), "div");
    assert!(renderer.node().has_class(CLASS_NAME));
    assert_eq!(renderer.node().children().len(), 0);
}

#[test]
fn test_renders_tool_call_payload() {
    let mut renderer = renderer();
    let model = context(json!({
        "data": { MIME_TYPE: "tool-call" },
        "metadata": { "toolName": "calc", "input": "1+1", "status": "completed", "output": "2" }
    }));

    render(&mut renderer, &model).unwrap();

    let panel = renderer.node().find_by_class("jp-ai-tool-call").unwrap();
    assert!(panel.has_class("jp-ai-tool-completed"));
    assert!(renderer.node().to_html().starts_with(
        r#"<div class="jp-RenderedChatComponents"><details class="jp-ai-tool-call"#
    ));
}

#[test]
fn test_repeated_renders_append_independent_panels() {
    let mut renderer = renderer();
    let first = RenderContext::tool_call(&ToolCallMetadata::new(
        "a",
        "1",
        ToolCallStatus::Pending,
    ))
    .unwrap();
    let second = RenderContext::tool_call(&ToolCallMetadata::new(
        "b",
        "2",
        ToolCallStatus::Completed,
    ))
    .unwrap();

    render(&mut renderer, &first).unwrap();
    render(&mut renderer, &second).unwrap();

    let titles: Vec<String> = renderer
        .node()
        .find_all_by_class("jp-ai-tool-title")
        .map(|t| t.text_content())
        .collect();
    assert_eq!(titles, ["a", "b"]);
}

#[yare::parameterized(
    other_payload = { json!({ "data": { MIME_TYPE: "chat-message" }, "metadata": {} }) },
    non_string_payload = { json!({ "data": { MIME_TYPE: { "kind": "tool-call" } } }) },
    other_mime_type = { json!({ "data": { "text/plain": "tool-call" } }) },
    empty = { json!({}) },
)]
fn non_tool_call_renders_nothing(value: Value) {
    let mut renderer = renderer();
    render(&mut renderer, &context(value)).unwrap();
    assert_eq!(renderer.node().children().len(), 0);
}

#[test]
fn test_malformed_metadata_is_rejected() {
    let mut renderer = renderer();
    let model = context(json!({
        "data": { MIME_TYPE: "tool-call" },
        "metadata": { "toolName": "calc", "input": "1+1", "status": "exploded" }
    }));

    let err = render(&mut renderer, &model).unwrap_err();
    assert!(matches!(err, RenderError::Metadata(_)));
    assert!(err.to_string().contains("exploded"), "{err}");
    assert_eq!(renderer.node().children().len(), 0);
}

#[test]
fn test_custom_mime_type_is_honoured() {
    let mut renderer = ComponentsRenderer::new(
        "application/x-test",
        Arc::new(NullTranslator),
        ApprovalHandle::new(),
        "⚡",
    );
    let model = context(json!({
        "data": { "application/x-test": "tool-call" },
        "metadata": { "toolName": "t", "input": "i", "status": "pending" }
    }));

    render(&mut renderer, &model).unwrap();
    assert_eq!(renderer.mime_type(), "application/x-test");
    assert!(renderer.node().find_by_class("jp-ai-tool-call").is_some());
}

#[test]
fn test_tool_call_context_round_trips_metadata() {
    let metadata = ToolCallMetadata::new("deploy", "env=prod", ToolCallStatus::AwaitingApproval)
        .with_approval("t1", "a1");
    let model = RenderContext::tool_call(&metadata).unwrap();

    assert_eq!(model.data.get(MIME_TYPE), Some(&json!("tool-call")));
    assert_eq!(ToolCallMetadata::from_map(&model.metadata).unwrap(), metadata);
}
