// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markup-safe text encoding.
//!
//! Every piece of user-supplied text reaches the serialized HTML through a
//! [`TextEncoder`]. The default [`EntityEncoder`] replaces the five characters
//! `& < > " '` with named or numeric entities, which makes its output safe both
//! as element content and inside a double-quoted attribute value.

use std::borrow::Cow;

/// Encodes plain text for embedding in HTML.
///
/// Output must never contain a raw `<`, `>`, `"` or `'`, and every `&` must
/// start an entity.
pub trait TextEncoder: Send + Sync {
    fn encode<'a>(&self, raw: &'a str) -> Cow<'a, str>;
}

/// Deterministic entity substitution for `& < > " '`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntityEncoder;

impl EntityEncoder {
    fn entity(c: char) -> Option<&'static str> {
        match c {
            '&' => Some("&amp;"),
            '<' => Some("&lt;"),
            '>' => Some("&gt;"),
            '"' => Some("&quot;"),
            '\'' => Some("&#39;"),
            _ => None,
        }
    }
}

impl TextEncoder for EntityEncoder {
    fn encode<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        let Some(first) = raw.find(|c: char| Self::entity(c).is_some()) else {
            return Cow::Borrowed(raw);
        };

        let mut out = String::with_capacity(raw.len() + 16);
        out.push_str(&raw[..first]);
        for c in raw[first..].chars() {
            match Self::entity(c) {
                Some(entity) => out.push_str(entity),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}

/// Escape `value` with the default [`EntityEncoder`].
pub fn escape_html(value: &str) -> String {
    EntityEncoder.encode(value).into_owned()
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
