use crate::types::{SessionState, DEFAULT_WIN_VALUE};

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSnapshot {
    pub height: usize,
    pub width: usize,
    /// Row-major tiles, `height * width` long
    pub cells: Vec<u32>,
    pub score: u64,
    pub highscore: u64,
    pub win_value: u32,
    pub state: SessionState,
}

impl FieldSnapshot {
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.width.max(1))
    }
}

impl Default for FieldSnapshot {
    fn default() -> Self {
        Self {
            height: 0,
            width: 0,
            cells: Vec::new(),
            score: 0,
            highscore: 0,
            win_value: DEFAULT_WIN_VALUE,
            state: SessionState::Init,
        }
    }
}
