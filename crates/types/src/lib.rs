//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the engine, the session controller,
//! the input mapper and the renderer. All types are plain data with no external
//! dependencies, so they can be used in any context (core logic, terminal UI, tests).
//!
//! # Board Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_HEIGHT` | 4 | Rows on a classic board |
//! | `DEFAULT_WIDTH` | 4 | Columns on a classic board |
//! | `DEFAULT_WIN_VALUE` | 2048 | Tile value that wins the game |
//! | `MIN_SIDE` | 2 | Smallest legal board side |
//! | `MAX_WIN_VALUE` | 2^31 | Largest win value; keeps every merge within `u32` |
//!
//! # Spawn Rule
//!
//! New tiles are 2 with 90% probability and 4 with 10% probability
//! (`FOUR_SPAWN_PERCENT`), placed uniformly among empty cells.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, SessionState};
//!
//! let action = GameAction::Move(Direction::Left);
//! assert_eq!(action.as_str(), "left");
//!
//! assert!(SessionState::Won.awaits_input());
//! assert!(!SessionState::Exiting.awaits_input());
//! ```

/// Rows on a classic board
pub const DEFAULT_HEIGHT: usize = 4;

/// Columns on a classic board
pub const DEFAULT_WIDTH: usize = 4;

/// Tile value that ends the game with a win
pub const DEFAULT_WIN_VALUE: u32 = 2048;

/// Smallest board side accepted at construction
pub const MIN_SIDE: usize = 2;

/// Largest accepted win value
pub const MAX_WIN_VALUE: u32 = 1 << 31;

/// Chance (in percent) that a spawned tile is a 4 rather than a 2
pub const FOUR_SPAWN_PERCENT: u32 = 10;

/// Number of tiles placed on an empty board by a reset
pub const INITIAL_TILES: usize = 2;

/// The four directions the whole board can be shifted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the game-over check walks them
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Player actions produced by an input source
///
/// This is the complete vocabulary the session controller understands;
/// raw key events never reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift the board in a direction
    Move(Direction),
    /// Abandon the current session and start a new one
    Restart,
    /// Leave the game
    Exit,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
            GameAction::Exit => "exit",
        }
    }
}

/// Session state machine states
///
/// - **Init**: reset the engine, then immediately start playing
/// - **Playing**: moves are applied to the board
/// - **Won**: a tile reached the win value; only restart/exit act
/// - **Lost**: no legal move remains; only restart/exit act
/// - **Exiting**: terminal, the run loop stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Init,
    Playing,
    Won,
    Lost,
    Exiting,
}

impl SessionState {
    /// States that render a frame and then block for an action
    pub fn awaits_input(&self) -> bool {
        matches!(
            self,
            SessionState::Playing | SessionState::Won | SessionState::Lost
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Init => "init",
            SessionState::Playing => "playing",
            SessionState::Won => "won",
            SessionState::Lost => "lost",
            SessionState::Exiting => "exiting",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_board_defaults() {
        assert_eq!(DEFAULT_HEIGHT, 4);
        assert_eq!(DEFAULT_WIDTH, 4);
        assert_eq!(DEFAULT_WIN_VALUE, 2048);
        assert_eq!(FOUR_SPAWN_PERCENT, 10);
        assert_eq!(INITIAL_TILES, 2);
    }

    #[test]
    fn action_names_are_distinct() {
        let names: Vec<&str> = Direction::ALL
            .iter()
            .map(|&dir| GameAction::Move(dir).as_str())
            .chain([GameAction::Restart.as_str(), GameAction::Exit.as_str()])
            .collect();
        for (i, a) in names.iter().enumerate() {
            assert!(names[i + 1..].iter().all(|b| a != b));
        }
        assert_eq!(GameAction::Move(Direction::Up).as_str(), "up");
    }

    #[test]
    fn only_interactive_states_await_input() {
        assert!(!SessionState::Init.awaits_input());
        assert!(SessionState::Playing.awaits_input());
        assert!(SessionState::Won.awaits_input());
        assert!(SessionState::Lost.awaits_input());
        assert!(!SessionState::Exiting.awaits_input());
    }
}
