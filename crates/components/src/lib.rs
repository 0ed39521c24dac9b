// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Chat components renderer.
//!
//! Renders the `application/vnd.jupyter.chat.components` content type. A
//! fragment whose payload is `tool-call` is turned into a collapsible panel
//! describing one AI tool invocation: tool name, status badge, input, optional
//! output and, while the call awaits approval, Approve/Reject controls wired to
//! a host-supplied callback.
//!
//! The crate is presentational. It never executes tools or remembers approval
//! decisions; each render builds an independent [`dom::Element`] tree that the
//! host serializes or mounts.
//!
//! ```
//! use chat_components::{RendererFactory, RendererOptions, RenderContext};
//! use serde_json::json;
//!
//! let factory = RendererFactory::new();
//! let mut renderer = factory.create_renderer(RendererOptions::default());
//! let context: RenderContext = serde_json::from_value(json!({
//!     "data": { "application/vnd.jupyter.chat.components": "tool-call" },
//!     "metadata": { "toolName": "search", "input": "{}", "status": "pending" }
//! })).unwrap();
//!
//! let _ = renderer.render_model(&context);
//! assert!(renderer.node().to_html().contains("Running..."));
//! ```

pub mod approval;
pub mod builder;
pub mod config;
pub mod dom;
pub mod escape;
pub mod factory;
pub mod metadata;
pub mod renderer;
pub mod status;
pub mod translate;

pub use approval::{ApprovalAction, ApprovalCallback, ApprovalHandle};
pub use builder::{build_tool_call, BuildContext, DEFAULT_ICON};
pub use config::{ConfigError, RendererConfig};
pub use dom::{Element, Node};
pub use escape::{escape_html, EntityEncoder, TextEncoder};
pub use factory::{RendererFactory, RendererOptions, DEFAULT_RANK};
pub use metadata::{MetadataError, ToolCallMetadata};
pub use renderer::{
    ComponentsRenderer, RenderContext, RenderError, CLASS_NAME, MIME_TYPE, TOOL_CALL,
};
pub use status::{status_label, ParseStatusError, StatusPresentation, ToolCallStatus};
pub use translate::{Catalog, NullTranslator, Translator};
