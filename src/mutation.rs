//! # Mutation
//!
//! The `Mutation` trait defines the neighborhood move of a problem domain: given a
//! solution it produces one randomly perturbed neighbor.
//!
//! ## Example
//!
//! ```rust
//! use annealing::mutation::Mutation;
//! use annealing::rng::RandomNumberGenerator;
//! use annealing::solution::Solution;
//!
//! #[derive(Debug, Clone)]
//! struct Point {
//!     x: i64,
//! }
//!
//! impl Solution for Point {
//!     fn criterion(&self) -> f64 {
//!         self.x.abs() as f64
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Step;
//!
//! impl Mutation<Point> for Step {
//!     fn mutate(&self, solution: &Point, rng: &mut RandomNumberGenerator) -> Point {
//!         let delta = if rng.gen_probability() < 0.5 { -1 } else { 1 };
//!         Point { x: solution.x + delta }
//!     }
//! }
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let start = Point { x: 4 };
//! let next = Step.mutate(&start, &mut rng);
//! assert_eq!((next.x - start.x).abs(), 1);
//! ```

use std::fmt::Debug;

use crate::{rng::RandomNumberGenerator, solution::Solution};

/// A strategy producing neighbors of a solution.
///
/// Implementations must leave their input untouched and return a new candidate that
/// differs from it by one elementary perturbation. All randomness comes from the
/// generator passed in, which belongs to the calling worker.
pub trait Mutation<S: Solution>: Debug + Send + Sync {
    /// Returns a random neighbor of `solution`.
    fn mutate(&self, solution: &S, rng: &mut RandomNumberGenerator) -> S;
}
