// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Renderer configuration loaded from TOML or JSON files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::builder::DEFAULT_ICON;
use crate::factory::DEFAULT_RANK;
use crate::translate::Catalog;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to load translations '{path}': {source}")]
    Translations {
        path: PathBuf,
        #[source]
        source: Box<ConfigError>,
    },
}

fn default_rank() -> u32 {
    DEFAULT_RANK
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

/// Top-level renderer configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RendererConfig {
    /// Rank reported to the host when choosing between renderers (default: 100)
    #[serde(default = "default_rank")]
    pub default_rank: u32,

    /// Header glyph (default: "⚡")
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Inline translations, source text to localized text
    #[serde(default)]
    pub translations: HashMap<String, String>,

    /// JSON catalog merged beneath `translations`.
    /// Relative paths resolve against the config file's directory.
    #[serde(default)]
    pub translations_file: Option<PathBuf>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            default_rank: DEFAULT_RANK,
            icon: DEFAULT_ICON.to_string(),
            translations: HashMap::new(),
            translations_file: None,
        }
    }
}

impl RendererConfig {
    /// Load from `path`, parsing JSON for `.json` files and TOML otherwise.
    ///
    /// A relative `translations_file` is rewritten to be relative to the
    /// config file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: RendererConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        if let Some(file) = config.translations_file.take() {
            let resolved = if file.is_relative() {
                path.parent().unwrap_or(Path::new(".")).join(file)
            } else {
                file
            };
            config.translations_file = Some(resolved);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.icon.trim().is_empty() {
            return Err(ConfigError::Validation("icon must not be empty".to_string()));
        }
        Ok(())
    }

    /// Build the translation catalog: file entries first, inline entries on top.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        let mut catalog = match &self.translations_file {
            Some(path) => Catalog::load(path).map_err(|e| ConfigError::Translations {
                path: path.clone(),
                source: Box::new(e),
            })?,
            None => Catalog::new(),
        };
        catalog.merge(self.translations.clone().into_iter().collect());
        Ok(catalog)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
