//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps the `rand` crate's `StdRng` and provides the
//! handful of draws the annealing engine and its strategies need.
//!
//! ## Example
//!
//! ```rust
//! use annealing::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let p = rng.gen_probability();
//! assert!((0.0..1.0).contains(&p));
//!
//! let index = rng.gen_index(10);
//! assert!(index < 10);
//! ```
//!
//! ## Worker generators
//!
//! Generators are never shared between threads. The engine draws one seed per worker
//! from its own generator with [`RandomNumberGenerator::next_seed`] and every worker builds
//! an independent generator from that seed.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a fresh seed for a derived generator.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.gen()
    }

    /// Returns a uniformly distributed value in `[0, 1)`.
    pub fn gen_probability(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns a uniformly distributed index in `[0, upper)`.
    ///
    /// An `upper` of zero yields zero; callers are expected to check emptiness first.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }

    /// Returns a uniformly distributed value in `[from, to]`.
    pub fn gen_inclusive(&mut self, from: u64, to: u64) -> u64 {
        self.rng.gen_range(from..=to)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
