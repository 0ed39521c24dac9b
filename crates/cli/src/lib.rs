// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Headless host for the chat components renderer.
//!
//! Reads a MIME bundle, renders it the way a notebook front-end would, and
//! prints the resulting HTML. Useful for previewing panels and for exercising
//! approval controls without a browser.

pub mod cli;
pub mod command;
pub mod diagnostic;
pub mod logging;
