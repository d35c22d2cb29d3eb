//! Grid module - the tile matrix and the slide/merge transforms
//!
//! The grid is a `height x width` matrix of tile values stored in a flat,
//! row-major vector. `0` is an empty cell; every other value is a power of two.
//! Coordinates: (x, y) where x is the column (left to right) and y the row (top to bottom).
//!
//! Only one move is implemented directly: sliding every row to the left. The other
//! three directions reuse it by re-orienting the matrix first and undoing the
//! re-orientation afterwards:
//!
//! | Direction | Composition |
//! |-----------|-------------|
//! | Left  | `left` |
//! | Right | `mirror . left . mirror` |
//! | Up    | `transpose . left . transpose` |
//! | Down  | `transpose . right . transpose` |
//!
//! The legality predicate uses the same orientations, so it cannot disagree with
//! the transform.

use crate::error::ConfigError;
use crate::types::Direction;

/// The tile matrix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Flat array of tiles, row-major order (y * width + x)
    cells: Vec<u32>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![0; height * width],
        }
    }

    /// Build a grid from rows, top row first
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(ConfigError::RaggedRows);
        }
        Ok(Self {
            height,
            width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get tile at (x, y); None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set tile at (x, y); false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, value: u32) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Flat row-major view of every tile
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Reset every tile to empty
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Coordinates of every empty cell, row by row
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| (i % self.width, i / self.width))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn count_tiles(&self) -> usize {
        self.cells.len() - self.count_empty()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let mut out = Self::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.cells[x * self.height + y] = self.cells[y * self.width + x];
            }
        }
        out
    }

    /// Reverse every row
    pub fn mirror(&self) -> Self {
        let mut out = self.clone();
        for row in out.cells.chunks_exact_mut(self.width) {
            row.reverse();
        }
        out
    }

    /// Re-orient the grid so that moving in `direction` becomes moving left
    fn oriented(&self, direction: Direction) -> Self {
        match direction {
            Direction::Left => self.clone(),
            Direction::Right => self.mirror(),
            Direction::Up => self.transpose(),
            Direction::Down => self.transpose().mirror(),
        }
    }

    /// Slide every row left, returning the score gained by merges
    fn slide_rows_left(&mut self) -> u64 {
        let mut gained = 0;
        for row in self.cells.chunks_exact_mut(self.width) {
            gained += slide_row_left(row);
        }
        gained
    }

    /// Apply a move without randomness: returns the moved grid and the merge score
    pub fn slid(&self, direction: Direction) -> (Self, u64) {
        match direction {
            Direction::Left => {
                let mut out = self.clone();
                let gained = out.slide_rows_left();
                (out, gained)
            }
            Direction::Right => {
                let (out, gained) = self.mirror().slid(Direction::Left);
                (out.mirror(), gained)
            }
            Direction::Up => {
                let (out, gained) = self.transpose().slid(Direction::Left);
                (out.transpose(), gained)
            }
            Direction::Down => {
                let (out, gained) = self.transpose().slid(Direction::Right);
                (out.transpose(), gained)
            }
        }
    }

    /// Whether moving in `direction` would change the grid
    pub fn can_slide(&self, direction: Direction) -> bool {
        self.oriented(direction).rows().any(row_can_slide_left)
    }

    /// Whether any direction can change the grid
    pub fn has_moves(&self) -> bool {
        Direction::ALL.iter().any(|&dir| self.can_slide(dir))
    }
}

/// Slide non-zero tiles to the front of the row, keeping their order
pub fn compact_row(row: &mut [u32]) {
    let mut write = 0;
    for read in 0..row.len() {
        if row[read] != 0 {
            row[write] = row[read];
            write += 1;
        }
    }
    row[write..].fill(0);
}

/// Merge equal neighbours left to right, leaving a zero where the right tile was.
///
/// A tile takes part in at most one merge. Returns the sum of the new tiles.
pub fn merge_row(row: &mut [u32]) -> u64 {
    let mut gained = 0;
    let mut i = 0;
    while i + 1 < row.len() {
        if row[i] != 0 && row[i] == row[i + 1] {
            // Win values are capped at MAX_WIN_VALUE, so a session stops before this can overflow.
            row[i] = row[i].checked_mul(2).expect("tile value overflowed u32");
            row[i + 1] = 0;
            gained += u64::from(row[i]);
            i += 2;
        } else {
            i += 1;
        }
    }
    gained
}

/// Compact, merge, compact again. Returns the score gained.
pub fn slide_row_left(row: &mut [u32]) -> u64 {
    compact_row(row);
    let gained = merge_row(row);
    compact_row(row);
    gained
}

/// True iff some adjacent pair allows a shift (gap then tile) or a merge (equal tiles)
pub fn row_can_slide_left(row: &[u32]) -> bool {
    row.windows(2)
        .any(|pair| (pair[0] == 0 && pair[1] != 0) || (pair[0] != 0 && pair[0] == pair[1]))
}
