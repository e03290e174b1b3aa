use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

use super::Tile;

/// Values drawn per candidate cell when spawning: empty 3/7, 2 3/7, 4 1/7.
pub const SPAWN_POOL: [Tile; 7] = [None, None, None, Some(2), Some(2), Some(2), Some(4)];

/// Seeded generator owned by a single board.
///
/// The seed is fixed at construction; a new game means a new `RandomSource`.
#[derive(Clone)]
pub struct RandomSource {
    seed: u64,
    rng: StdRng,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        RandomSource { seed, rng: StdRng::seed_from_u64(seed) }
    }

    /// The seed this source was created with.
    #[inline]
    pub fn seed(&self) -> u64 { self.seed }

    /// A uniformly shuffled permutation of `0..len`.
    pub fn shuffled_positions(&mut self, len: usize) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..len).collect();
        positions.shuffle(&mut self.rng);
        positions
    }

    /// One draw from [`SPAWN_POOL`].
    pub fn draw_tile(&mut self) -> Tile {
        SPAWN_POOL[self.rng.gen_range(0..SPAWN_POOL.len())]
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSource").field("seed", &self.seed).finish_non_exhaustive()
    }
}

/// An unpredictable seed for starting a new game, from thread-local entropy.
pub fn fresh_seed() -> u64 {
    rand::thread_rng().gen()
}
