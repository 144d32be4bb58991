//! Fruit placement.
//!
//! Fruit lands anywhere on the board, including under the snake. A fruit
//! hidden under the body can be eaten once the body has moved off it.

use rand::{
    Rng,
    RngCore,
    SeedableRng,
    rngs::SmallRng,
};

use crate::grid::{
    Cell,
    Grid,
};

/// A uniformly random cell of `grid`.
pub fn spawn<R: RngCore>(grid: Grid, rng: &mut R) -> Cell {
    Cell::new(rng.gen_range(0..grid.width), rng.gen_range(0..grid.height))
}

/// Owns the fruit PRNG. Reseed it every round so rounds do not repeat.
#[derive(Clone, Debug)]
pub struct FruitSpawner {
    rng: SmallRng,
}

impl FruitSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    pub fn spawn(&mut self, grid: Grid) -> Cell {
        spawn(grid, &mut self.rng)
    }
}
