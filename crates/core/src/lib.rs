//! Core game logic module - pure, synchronous, and testable
//!
//! This crate contains the 2048 rules and the session state machine. It has
//! **no dependencies** on terminals or I/O, which makes it:
//!
//! - **Testable**: every rule is exercised by unit tests on hand-built boards
//! - **Portable**: runs behind any renderer and input source (terminal, GUI, headless)
//! - **Reproducible on demand**: the random source is injectable, so tests can seed it
//!
//! # Module Structure
//!
//! - [`grid`]: tile matrix, transpose/mirror, and the slide/merge transform
//! - [`field`]: the engine - score, high score, moves, spawns, win/loss checks
//! - [`rng`]: the 2-or-4 spawn rule
//! - [`session`]: Init/Playing/Won/Lost/Exiting state machine and collaborator traits
//! - [`snapshot`]: read-only frame handed to renderers
//! - [`config`]: board size and win value, with environment overrides
//! - [`error`]: configuration and invariant errors
//!
//! # Game Rules
//!
//! - **Move**: every tile slides as far as possible in one direction
//! - **Merge**: two equal neighbours combine into one tile of double value; the new
//!   value is added to the score. A tile merges at most once per move
//! - **Spawn**: after every move that changed the board, a 2 (90%) or 4 (10%)
//!   appears on a random empty cell
//! - **Win**: any tile reaches the win value (2048 by default)
//! - **Loss**: no direction changes the board
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameConfig, GameField};
//! use tui_2048_types::Direction;
//!
//! let mut field = GameField::new(GameConfig::default()).unwrap();
//! assert_eq!(field.grid().count_tiles(), 2);
//!
//! // A move either changes the board (and spawns a tile) or is rejected.
//! let before = field.grid().clone();
//! if field.move_in(Direction::Left) {
//!     assert_ne!(field.grid(), &before);
//! } else {
//!     assert_eq!(field.grid(), &before);
//! }
//! assert!(!field.is_gameover());
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod grid;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::{ConfigError, GridError};
pub use field::{GameField, MoveOutcome, Spawn};
pub use grid::{compact_row, merge_row, row_can_slide_left, slide_row_left, Grid};
pub use session::{enter_init, transition, ActionSource, Session, SnapshotSink};
pub use snapshot::FieldSnapshot;
