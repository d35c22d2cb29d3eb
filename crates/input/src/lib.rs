//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and provides a blocking
//! [`TerminalInput`] that implements the core's `ActionSource`: it keeps reading
//! until a recognised key is pressed and silently drops everything else.

pub mod map;
pub mod source;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
pub use source::{EventReader, TerminalInput};
