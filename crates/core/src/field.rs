//! Game field module - the grid engine
//!
//! `GameField` owns the grid, the score, the session high score and the random
//! source. It is the only thing that mutates the grid: `reset` and `move_in`
//! (plus `spawn`, which both of them use).

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::{ConfigError, GridError};
use crate::grid::Grid;
use crate::rng::{pick_cell, spawn_value};
use crate::snapshot::FieldSnapshot;
use crate::types::{Direction, SessionState, INITIAL_TILES};

/// A tile placed by [`GameField::spawn`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub x: usize,
    pub y: usize,
    pub value: u32,
}

/// Result of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Whether the move was legal (and the grid changed)
    pub moved: bool,
    /// Sum of the tiles created by merges
    pub gained: u64,
    /// The tile spawned after a legal move
    pub spawned: Option<Spawn>,
}

/// The 2048 engine
#[derive(Debug, Clone)]
pub struct GameField<R = ThreadRng> {
    grid: Grid,
    score: u64,
    highscore: u64,
    win_value: u32,
    rng: R,
}

impl GameField<ThreadRng> {
    /// Create a field using the process-wide thread RNG, then reset it
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameField<R> {
    /// Create a field drawing tiles from `rng`, then reset it
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut field = Self {
            grid: Grid::new(config.height, config.width),
            score: 0,
            highscore: 0,
            win_value: config.win_value,
            rng,
        };
        field.reset();
        Ok(field)
    }

    /// Create a field around an existing grid, without resetting it
    pub fn from_grid(grid: Grid, win_value: u32, rng: R) -> Result<Self, ConfigError> {
        GameConfig::new(grid.height(), grid.width(), win_value).validate()?;
        Ok(Self {
            grid,
            score: 0,
            highscore: 0,
            win_value,
            rng,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn highscore(&self) -> u64 {
        self.highscore
    }

    pub fn win_value(&self) -> u32 {
        self.win_value
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.max_tile()
    }

    /// Start a new session on the same field.
    ///
    /// The finished session's score is folded into the high score first.
    pub fn reset(&mut self) {
        if self.score > self.highscore {
            info!(
                previous = self.highscore,
                highscore = self.score,
                "new high score"
            );
            self.highscore = self.score;
        }
        self.score = 0;
        self.grid.clear();
        for _ in 0..INITIAL_TILES {
            // A validated field has at least 4 cells.
            self.spawn()
                .expect("an empty board always has room for the initial tiles");
        }
        debug!(height = self.height(), width = self.width(), "field reset");
    }

    /// Move in `direction`; false (and nothing changes) when the move is illegal
    pub fn move_in(&mut self, direction: Direction) -> bool {
        self.try_move(direction).moved
    }

    /// Move in `direction`, reporting the merge score and the spawned tile
    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        if !self.move_is_possible(direction) {
            debug!(direction = direction.as_str(), "move rejected");
            return MoveOutcome::default();
        }

        let (grid, gained) = self.grid.slid(direction);
        self.grid = grid;
        self.score += gained;

        // A shift needs a gap and a merge frees a cell, so a legal move leaves room.
        let spawned = self
            .spawn()
            .expect("a legal move always leaves an empty cell");
        debug!(
            direction = direction.as_str(),
            gained,
            score = self.score,
            "move applied"
        );

        MoveOutcome {
            moved: true,
            gained,
            spawned: Some(spawned),
        }
    }

    /// Whether moving in `direction` would change the grid. Never mutates.
    pub fn move_is_possible(&self, direction: Direction) -> bool {
        self.grid.can_slide(direction)
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell
    pub fn spawn(&mut self) -> Result<Spawn, GridError> {
        let empty = self.grid.empty_cells();
        let (x, y) = pick_cell(&mut self.rng, &empty).ok_or(GridError::BoardFull)?;
        let value = spawn_value(&mut self.rng);
        self.grid.set(x, y, value);
        debug!(x, y, value, "tile spawned");
        Ok(Spawn { x, y, value })
    }

    /// Some tile has reached the win value
    pub fn is_win(&self) -> bool {
        self.grid.cells().iter().any(|&v| v >= self.win_value)
    }

    /// No direction can change the grid
    pub fn is_gameover(&self) -> bool {
        !self.grid.has_moves()
    }

    pub fn snapshot_into(&self, out: &mut FieldSnapshot, state: SessionState) {
        out.height = self.grid.height();
        out.width = self.grid.width();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.score = self.score;
        out.highscore = self.highscore;
        out.win_value = self.win_value;
        out.state = state;
    }

    pub fn snapshot(&self, state: SessionState) -> FieldSnapshot {
        let mut s = FieldSnapshot::default();
        self.snapshot_into(&mut s, state);
        s
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}
