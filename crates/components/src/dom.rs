// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Owned element tree produced by the builder.
//!
//! Text nodes always hold plain text. Markup is produced only by
//! [`Element::to_html`], which runs every text node and attribute value
//! through a [`TextEncoder`], so there is no way to smuggle raw markup into
//! the tree.

use crate::approval::ApprovalBinding;
use crate::escape::{EntityEncoder, TextEncoder};

/// A node in the element tree.
#[derive(Clone, Debug)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An HTML element with classes, attributes, children and an optional click
/// binding.
#[derive(Clone, Debug)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
    on_click: Option<ApprovalBinding>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    // Builder methods

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.append(child);
        self
    }

    pub fn with_on_click(mut self, binding: ApprovalBinding) -> Self {
        self.on_click = Some(binding);
        self
    }

    // Mutation

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    // Queries

    pub fn tag(&self) -> &str {
        self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    pub fn on_click(&self) -> Option<&ApprovalBinding> {
        self.on_click.as_ref()
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }

    /// Depth-first iterator over this element and its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First element (self included) carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.descendants().find(|e| e.has_class(class))
    }

    pub fn find_all_by_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Element> {
        self.descendants().filter(move |e| e.has_class(class))
    }

    pub fn find_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.descendants().filter(move |e| e.tag == tag)
    }

    /// Dispatch a click on this element.
    ///
    /// Returns `true` when a bound callback was invoked.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(binding) => binding.dispatch(),
            None => false,
        }
    }

    // Serialization

    /// Serialize with the default [`EntityEncoder`].
    pub fn to_html(&self) -> String {
        self.to_html_with(&EntityEncoder)
    }

    pub fn to_html_with(&self, encoder: &dyn TextEncoder) -> String {
        let mut out = String::new();
        self.write_html(&mut out, encoder);
        out
    }

    fn write_html(&self, out: &mut String, encoder: &dyn TextEncoder) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&encoder.encode(&self.classes.join(" ")));
            out.push('"');
        }
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(&encoder.encode(name));
            out.push_str("=\"");
            out.push_str(&encoder.encode(value));
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&encoder.encode(text)),
                Node::Element(e) => e.write_html(out, encoder),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Iterator returned by [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        // Push in reverse so the first child is visited first.
        self.stack.extend(next.child_elements().rev());
        Some(next)
    }
}

#[cfg(test)]
#[path = "dom_tests.rs"]
mod tests;
