//! Seedable random number generation for question draws and player picks.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draws
//! - **Replayable**: `from_entropy` picks a seed and keeps it, so a session
//!   that went strangely can be replayed with `GameConfig::with_seed`
//!
//! ```
//! use party_trivia::core::GameRng;
//!
//! let pool = ["a", "b", "c", "d"];
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng1.choose(&pool), rng2.choose(&pool));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed taken from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::random::<u64>();
        tracing::debug!(seed, "seeded rng from entropy");
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice, uniformly.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
