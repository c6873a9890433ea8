#![warn(missing_docs)]
//! Highlightr Core - Headless Highlight Toggling Engine
//!
//! # Overview
//!
//! `highlightr-core` wraps and unwraps an editor selection with inline highlight markup
//! (`<mark style="background: ...;">...</mark>`) through a single toggle action, and strips all
//! such markup from a selection. It never owns the document: the host editor exposes its buffer
//! through the [`TextBuffer`] trait and the engines return replacements for the host to commit.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Session (settings + subscriptions)         │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Command Registry & Executor                │  ← Host glue
//! ├─────────────────────────────────────────────┤
//! │  ToggleEngine          │  StripEngine       │  ← Pure text transforms
//! ├─────────────────────────────────────────────┤
//! │  TextBuffer trait (RopeBuffer)              │  ← Host buffer access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use highlightr_core::{MarkupTemplate, Position, RopeBuffer, toggle_markup};
//!
//! let template = MarkupTemplate::highlight("#ffab00");
//! let mut buffer = RopeBuffer::new("hello world");
//! buffer.select(Position::new(0, 0), Position::new(0, 5));
//!
//! // Wrap: the following space already separates the markup, so none is added.
//! toggle_markup(&mut buffer, &template);
//! assert_eq!(
//!     buffer.text(),
//!     "<mark style=\"background: #ffab00;\">hello</mark> world"
//! );
//!
//! // Select the inner text again and toggle to unwrap.
//! buffer.select(Position::new(0, 35), Position::new(0, 40));
//! toggle_markup(&mut buffer, &template);
//! assert_eq!(buffer.text(), "hello world");
//! ```
//!
//! # Module Description
//!
//! - [`toggle`] - wrap/unwrap decision, text splicing and cursor arithmetic
//! - [`strip`] - removal of every highlight tag from a span
//! - [`buffer`] - host buffer capabilities and a rope-backed implementation
//! - [`commands`] - command registry and executor
//! - [`state`] - session context and settings-change notifications

pub mod buffer;
pub mod commands;
mod error;
pub mod state;
pub mod strip;
mod text;
pub mod toggle;

pub use buffer::{RopeBuffer, TextBuffer};
pub use commands::{
    CommandAction, CommandExecutor, CommandRegistry, CommandResult, CommandSpec,
    FOCUS_RESTORE_DELAY, MENU_COMMAND_ID, STRIP_COMMAND_ID, strip_markup, toggle_markup,
};
pub use error::{CommandError, MarkupError};
pub use highlightr_config::{
    ConfigError, Highlighter, HighlighterMethod, HighlighterStyle, MarkupTemplate, Settings,
};
pub use state::{HighlightrSession, SettingsChange, SettingsChangeCallback, SettingsChangeType};
pub use strip::StripEngine;
pub use text::{CursorAnchor, Position, Range};
pub use toggle::{ToggleAction, ToggleEngine, ToggleRequest, ToggleResult};
