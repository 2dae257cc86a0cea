//! # Solution Trait
//!
//! The `Solution` trait defines the interface for candidate solutions handled by the
//! annealing engine. A solution exposes a single cost, its criterion, where lower is better.
//!
//! ## Example
//!
//! ```rust
//! use annealing::solution::Solution;
//!
//! #[derive(Debug)]
//! struct Distance {
//!     x: f64,
//!     target: f64,
//! }
//!
//! impl Solution for Distance {
//!     fn criterion(&self) -> f64 {
//!         (self.x - self.target).abs()
//!     }
//! }
//!
//! let candidate = Distance { x: 3.0, target: 5.0 };
//! assert_eq!(candidate.criterion(), 2.0);
//! ```
//!
//! ## Immutability
//!
//! The engine never modifies a solution once it exists. New candidates are produced by a
//! [`Mutation`](crate::mutation::Mutation), and solutions are shared between worker threads
//! as `Arc<S>` handles, which is why the trait requires `Send` and `Sync`.
//!
//! A criterion that evaluates to NaN compares false against everything: such a candidate
//! is never accepted by the Metropolis test and never becomes a best solution.

use std::fmt::Debug;

/// Trait for candidate solutions of an optimization problem.
pub trait Solution: Debug + Send + Sync {
    /// Returns the cost of this solution. Lower is better.
    fn criterion(&self) -> f64;
}
