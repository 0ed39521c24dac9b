// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Localization capability supplied by the host.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maps source text to localized text.
///
/// Implementations must return the source text unchanged when they have no
/// entry for it.
pub trait Translator: Send + Sync {
    fn translate<'a>(&'a self, source: &'a str) -> Cow<'a, str>;
}

/// Identity translator used when the host provides none.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTranslator;

impl Translator for NullTranslator {
    fn translate<'a>(&'a self, source: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(source)
    }
}

/// In-memory message catalog keyed by source text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a flat JSON object of `source: localized` pairs.
    pub fn load(path: &Path) -> Result<Self, crate::config::ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn insert(&mut self, source: impl Into<String>, localized: impl Into<String>) {
        self.messages.insert(source.into(), localized.into());
    }

    /// Add every entry of `other`, replacing existing ones.
    pub fn merge(&mut self, other: Catalog) {
        self.messages.extend(other.messages);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Translator for Catalog {
    fn translate<'a>(&'a self, source: &'a str) -> Cow<'a, str> {
        match self.messages.get(source) {
            Some(localized) => Cow::Borrowed(localized.as_str()),
            None => Cow::Borrowed(source),
        }
    }
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
