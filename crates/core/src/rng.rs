//! RNG module - uniform random piece selection
//!
//! Every spawn picks one of the seven kinds with equal probability. The
//! generator is seeded so a game (and every test) can be replayed exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Seeded source of piece kinds
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: StdRng,
    seed: u64,
}

impl PieceRng {
    /// Create a new generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw the next kind, uniformly over the catalog
    pub fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.random_range(0..PieceKind::ALL.len());
        PieceKind::ALL[idx]
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceRng {
    fn default() -> Self {
        Self::new(1)
    }
}
