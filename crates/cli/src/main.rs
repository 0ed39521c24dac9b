// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! chat-components binary entry point.

use std::fs::File;
use std::io::{self, BufReader, Write};

use clap::Parser;

use chat_components_cli::cli::{Cli, Command, RenderArgs};
use chat_components_cli::command::{render_bundle, write_statuses, CliError};
use chat_components_cli::diagnostic::{print_decision, print_error, print_warning};
use chat_components_cli::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log.as_deref(), cli.debug);

    let result = match &cli.command {
        Command::Render(args) => run_render(args),
        Command::Statuses(args) => write_statuses(args, &mut io::stdout().lock()),
    };

    if let Err(e) = result {
        print_error(e);
        std::process::exit(1);
    }
}

fn run_render(args: &RenderArgs) -> Result<(), CliError> {
    let outcome = match args.input_path() {
        Some(path) => render_bundle(args, BufReader::new(File::open(path)?))?,
        None => render_bundle(args, io::stdin().lock())?,
    };

    if outcome.panels == 0 {
        print_warning("bundle contains no tool call; nothing rendered");
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", outcome.html)?;

    if let Some(decision) = &outcome.decision {
        print_decision(decision);
    }
    Ok(())
}
