//! Error types for the engine.
//!
//! There is no recoverable runtime error in the game itself. These types cover
//! the two contract violations: bad construction parameters, and a spawn on a
//! board with no empty cell.

use thiserror::Error;

/// Invalid construction parameters for a field or grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least 2x2, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
    #[error("win value must be between 1 and 2^31, got {0}")]
    InvalidWinValue(u32),
    #[error("grid rows must all have the same length")]
    RaggedRows,
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Engine invariant violations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cannot spawn a tile: board has no empty cell")]
    BoardFull,
}
