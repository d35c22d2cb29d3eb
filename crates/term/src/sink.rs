//! `SnapshotSink` implementation that draws to the terminal.

use anyhow::Result;

use crate::core::{FieldSnapshot, SnapshotSink};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Fallback when the terminal size cannot be queried.
const FALLBACK_VIEWPORT: (u16, u16) = (80, 24);

pub struct TerminalSink<'a> {
    view: GameView,
    renderer: &'a mut TerminalRenderer,
    fb: FrameBuffer,
}

impl<'a> TerminalSink<'a> {
    pub fn new(view: GameView, renderer: &'a mut TerminalRenderer) -> Self {
        Self {
            view,
            renderer,
            fb: FrameBuffer::new(0, 0),
        }
    }
}

impl SnapshotSink for TerminalSink<'_> {
    fn render(&mut self, snap: &FieldSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or(FALLBACK_VIEWPORT);
        self.view.render_into(snap, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw(&self.fb)
    }
}
