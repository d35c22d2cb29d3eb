//! Blocking action source backed by terminal events.

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::trace;

use crate::core::ActionSource;
use crate::map::action_for_event;
use crate::types::GameAction;

/// Reads one terminal event, blocking until one arrives.
pub type EventReader = fn() -> io::Result<Event>;

/// Retry-until-valid input loop.
///
/// Every event that does not map to an action (unknown keys, releases, resizes,
/// mouse and focus events) is dropped and the next one is read.
pub struct TerminalInput<F = EventReader> {
    read_event: F,
    discarded: u64,
}

impl TerminalInput<EventReader> {
    /// Read from the real terminal via `crossterm::event::read`.
    pub fn new() -> Self {
        Self::with_reader(event::read as EventReader)
    }
}

impl Default for TerminalInput<EventReader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> TerminalInput<F>
where
    F: FnMut() -> io::Result<Event>,
{
    pub fn with_reader(read_event: F) -> Self {
        Self {
            read_event,
            discarded: 0,
        }
    }

    /// Number of events dropped so far.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }
}

impl<F> ActionSource for TerminalInput<F>
where
    F: FnMut() -> io::Result<Event>,
{
    fn next_action(&mut self) -> Result<GameAction> {
        loop {
            let event = (self.read_event)()?;
            if let Some(action) = action_for_event(&event) {
                trace!(action = action.as_str(), "input");
                return Ok(action);
            }
            self.discarded += 1;
        }
    }
}
