//! Spawn rule - random tile value and position
//!
//! Every new tile is a 2 with 90% probability and a 4 with 10% probability,
//! independent of the board. Its position is chosen uniformly among the empty cells.
//!
//! The helpers are generic over [`rand::Rng`] so the engine can run on the
//! process-wide thread RNG while tests and benches use a seeded one.

use rand::Rng;

use crate::types::FOUR_SPAWN_PERCENT;

/// Draw the value of a newly spawned tile
pub fn spawn_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_range(0..100) < FOUR_SPAWN_PERCENT {
        4
    } else {
        2
    }
}

/// Pick one of `candidates` uniformly; None when there is nothing to pick
pub fn pick_cell<R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[(usize, usize)],
) -> Option<(usize, usize)> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.gen_range(0..candidates.len())])
}
