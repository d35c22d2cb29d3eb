//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: a [`GameView`] turns a
//! `core::FieldSnapshot` into a framebuffer of styled characters, and a
//! [`TerminalRenderer`] flushes that framebuffer to the terminal, rewriting only
//! what changed since the previous frame.
//!
//! Goals:
//! - Keep `core` free of I/O
//! - Keep view code pure so layouts can be unit-tested without a terminal

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sink;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::TerminalSink;
