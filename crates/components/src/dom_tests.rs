// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::approval::{ApprovalAction, ApprovalHandle};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::sync::Arc;

fn sample_tree() -> Element {
    Element::new("div")
        .with_class("outer")
        .with_child(
            Element::new("span")
                .with_class("first")
                .with_text("one")
                .with_child(Element::new("b").with_class("nested").with_text("two")),
        )
        .with_child(Element::new("span").with_class("second").with_text("three"))
}

#[test]
fn test_add_class_is_idempotent() {
    let mut element = Element::new("div").with_class("a");
    element.add_class("a");
    element.add_class("b");
    assert_eq!(element.classes(), ["a", "b"]);
}

#[test]
fn test_set_attr_replaces_value() {
    let mut element = Element::new("details").with_attr("open", "false");
    element.set_attr("open", "true");
    assert_eq!(element.attr("open"), Some("true"));
    assert_eq!(element.attr("missing"), None);
}

#[test]
fn test_text_content_concatenates_descendants() {
    assert_eq!(sample_tree().text_content(), "onetwothree");
}

#[test]
fn test_descendants_are_in_document_order() {
    let tree = sample_tree();
    let tags: Vec<&str> = tree.descendants().map(|e| e.tag()).collect();
    assert_eq!(tags, ["div", "span", "b", "span"]);
}

#[test]
fn test_find_by_class() {
    let tree = sample_tree();
    assert_eq!(tree.find_by_class("nested").unwrap().text_content(), "two");
    assert!(tree.find_by_class("outer").is_some());
    assert!(tree.find_by_class("absent").is_none());
    assert_eq!(tree.find_by_tag("span").count(), 2);
}

#[test]
fn test_to_html_structure() {
    let html = sample_tree().to_html();
    insta::assert_snapshot!(html, @r#"<div class="outer"><span class="first">one<b class="nested">two</b></span><span class="second">three</span></div>"#);
}

#[test]
fn test_to_html_escapes_text_and_attributes() {
    let element = Element::new("code")
        .with_attr("title", r#"say "hi""#)
        .with_text("<script>alert('x')</script> & more");

    assert_eq!(
        element.to_html(),
        "<code title=\"say &quot;hi&quot;\">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more</code>"
    );
}

#[test]
fn test_to_html_with_custom_encoder() {
    struct Upper;
    impl TextEncoder for Upper {
        fn encode<'a>(&self, raw: &'a str) -> Cow<'a, str> {
            Cow::Owned(raw.to_uppercase())
        }
    }

    let element = Element::new("p").with_class("x").with_text("hello");
    assert_eq!(element.to_html_with(&Upper), "<p class=\"X\">HELLO</p>");
}

#[test]
fn test_click_without_binding_does_nothing() {
    assert!(!Element::new("button").click());
}

#[test]
fn test_click_dispatches_binding() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let handle = ApprovalHandle::with_callback(move |t, a, ok| {
        sink.lock().push(format!("{t}/{a}/{ok}"));
    });

    let button = Element::new("button").with_on_click(ApprovalBinding::new(
        ApprovalAction::approve("t1", "a1"),
        handle,
    ));

    assert!(button.click());
    assert_eq!(*calls.lock(), vec!["t1/a1/true".to_string()]);
}
