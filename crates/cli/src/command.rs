// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand execution.

use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use chat_components::{
    status_label, ApprovalAction, Catalog, ConfigError, RenderContext, RenderError,
    RendererConfig, RendererFactory, RendererOptions, ToolCallStatus, Translator,
};
use parking_lot::Mutex;

use crate::cli::{ClickTarget, RenderArgs, StatusesArgs};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid MIME bundle: {0}")]
    Bundle(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("No {} control in the rendered output", .0.class_name())]
    MissingControl(ClickTarget),
}

/// Result of rendering one bundle.
#[derive(Debug)]
pub struct RenderOutcome {
    /// Serialized mount node
    pub html: String,
    /// Number of panels appended to the mount node
    pub panels: usize,
    /// Callback invocation produced by `--click`
    pub decision: Option<ApprovalAction>,
}

/// Build a factory from an optional config file and translation catalog.
///
/// Catalog entries from `translations` override those from the config.
pub fn load_factory(
    config: Option<&Path>,
    translations: Option<&Path>,
) -> Result<RendererFactory, CliError> {
    let config = match config {
        Some(path) => RendererConfig::load(path)?,
        None => RendererConfig::default(),
    };
    let mut factory = RendererFactory::from_config(&config)?;

    if let Some(path) = translations {
        let mut catalog = config.catalog()?;
        catalog.merge(Catalog::load(path)?);
        tracing::debug!(entries = catalog.len(), path = %path.display(), "loaded translations");
        factory = factory.with_translator(Arc::new(catalog));
    }
    Ok(factory)
}

/// Render the MIME bundle read from `input`.
pub fn render_bundle<R: Read>(
    args: &RenderArgs,
    mut input: R,
) -> Result<RenderOutcome, CliError> {
    let factory = load_factory(args.config.as_deref(), args.translations.as_deref())?;

    let mut raw = String::new();
    input.read_to_string(&mut raw)?;
    let model: RenderContext = serde_json::from_str(&raw)?;

    let mut renderer = factory.create_renderer(RendererOptions::default());
    renderer.render_model(&model).into_inner()?;
    let panels = renderer.node().child_elements().count();

    let slot: Arc<Mutex<Option<ApprovalAction>>> = Arc::new(Mutex::new(None));
    if let Some(target) = args.click {
        // Installed after rendering: controls read the callback at click time.
        let sink = Arc::clone(&slot);
        factory.set_approval_callback(move |target_id, approval_id, approve| {
            *sink.lock() = Some(ApprovalAction {
                target_id: target_id.to_string(),
                approval_id: approval_id.to_string(),
                approve,
            });
        });

        let control = renderer
            .node()
            .find_by_class(target.class_name())
            .ok_or(CliError::MissingControl(target))?;
        control.click();
    }
    let decision = slot.lock().take();

    Ok(RenderOutcome {
        html: renderer.node().to_html(),
        panels,
        decision,
    })
}

/// Write the presentation table, one tab-separated status per line.
pub fn write_statuses<W: Write>(args: &StatusesArgs, out: &mut W) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => RendererConfig::load(path)?,
        None => RendererConfig::default(),
    };
    let catalog = config.catalog()?;
    write_status_table(&catalog, out)?;
    Ok(())
}

fn write_status_table<W: Write>(
    translator: &dyn Translator,
    out: &mut W,
) -> std::io::Result<()> {
    for status in ToolCallStatus::ALL {
        let presentation = status.presentation();
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            status,
            presentation.container_class,
            presentation.status_class,
            presentation.open,
            status_label(status, translator)
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
