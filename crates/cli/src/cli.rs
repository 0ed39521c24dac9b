// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Headless renderer for chat components MIME bundles
#[derive(Parser, Debug, Clone)]
#[command(name = "chat-components", version, about)]
pub struct Cli {
    /// Log filter directive (env-filter syntax), e.g. "chat_components=debug"
    #[arg(long, global = true, env = "CHAT_COMPONENTS_LOG")]
    pub log: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render a MIME bundle to HTML on stdout
    Render(RenderArgs),

    /// Print the status presentation table
    Statuses(StatusesArgs),
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// MIME bundle JSON file (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Renderer configuration file (.toml or .json)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON translation catalog, layered over the config's translations
    #[arg(long, value_name = "PATH")]
    pub translations: Option<PathBuf>,

    /// Click an approval control after rendering and report the decision
    #[arg(long, value_enum)]
    pub click: Option<ClickTarget>,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct StatusesArgs {
    /// Renderer configuration file used for label translations
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Approval control to click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClickTarget {
    Approve,
    Reject,
}

impl ClickTarget {
    /// Class identifying the control in the rendered panel.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Approve => "jp-ai-approval-approve",
            Self::Reject => "jp-ai-approval-reject",
        }
    }
}

impl RenderArgs {
    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&std::path::Path> {
        self.input.as_deref().filter(|p| p.as_os_str() != "-")
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
