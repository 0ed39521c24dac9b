// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("chat-components").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_render_defaults_to_stdin() {
    let cli = parse(&["render"]);
    match cli.command {
        Command::Render(args) => {
            assert!(args.input_path().is_none());
            assert!(args.click.is_none());
        }
        other => panic!("expected render, got {other:?}"),
    }
}

#[test]
fn test_render_dash_means_stdin() {
    let cli = parse(&["render", "-"]);
    let Command::Render(args) = cli.command else {
        panic!("expected render");
    };
    assert!(args.input.is_some());
    assert!(args.input_path().is_none());
}

#[test]
fn test_render_with_options() {
    let cli = parse(&[
        "render",
        "bundle.json",
        "--config",
        "renderer.toml",
        "--translations",
        "fr.json",
        "--click",
        "reject",
        "--debug",
    ]);

    assert!(cli.debug);
    let Command::Render(args) = cli.command else {
        panic!("expected render");
    };
    assert_eq!(args.input_path(), Some(std::path::Path::new("bundle.json")));
    assert_eq!(args.config, Some(PathBuf::from("renderer.toml")));
    assert_eq!(args.translations, Some(PathBuf::from("fr.json")));
    assert_eq!(args.click, Some(ClickTarget::Reject));
}

#[test]
fn test_click_rejects_unknown_value() {
    let err = Cli::try_parse_from(["chat-components", "render", "--click", "maybe"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[test]
fn test_statuses_subcommand() {
    let cli = parse(&["statuses"]);
    assert!(matches!(cli.command, Command::Statuses(_)));
}

#[test]
fn test_click_target_classes() {
    assert_eq!(ClickTarget::Approve.class_name(), "jp-ai-approval-approve");
    assert_eq!(ClickTarget::Reject.class_name(), "jp-ai-approval-reject");
}
