// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for errors, warnings and approval decisions.
//!
//! Errors and warnings are colored when stderr is a terminal.

use std::io::{self, IsTerminal, Write};

use chat_components::ApprovalAction;

/// Print an error message to stderr.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// Report an approval callback invocation on stderr as one JSON line.
pub fn print_decision(action: &ApprovalAction) {
    write_decision(&mut io::stderr(), action);
}

fn write_decision<W: Write>(writer: &mut W, action: &ApprovalAction) {
    if let Ok(json) = serde_json::to_string(action) {
        let _ = writeln!(writer, "{}", json);
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
