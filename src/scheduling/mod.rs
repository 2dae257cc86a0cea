//! # Scheduling
//!
//! A load-balancing problem for the annealing engine: `W` work items with positive
//! durations are distributed over `P` workers. The [`Schedule`] criterion is the busiest
//! worker's total load minus the smallest "heaviest item" found on any worker, and
//! [`ReassignMutation`] moves one item to another worker.
//!
//! ## Example
//!
//! ```rust
//! use annealing::annealing::{Annealing, AnnealingOptions};
//! use annealing::cooldown::Cauchy;
//! use annealing::rng::RandomNumberGenerator;
//! use annealing::scheduling::{ReassignMutation, ScheduleInput};
//! use annealing::solution::Solution;
//!
//! let mut rng = RandomNumberGenerator::from_seed(3);
//! let input: ScheduleInput = "2,5,3,2".parse().unwrap();
//! let seed = input.seed(&mut rng).unwrap();
//! let seed_criterion = seed.criterion();
//!
//! let engine = Annealing::new(
//!     ReassignMutation,
//!     Cauchy::new(100.0).unwrap(),
//!     AnnealingOptions::new(2, 10, 10),
//! )
//! .unwrap();
//! let result = engine.run_with_rng(seed, &mut rng).unwrap();
//! assert!(result.criterion <= seed_criterion);
//! ```

pub mod generator;
pub mod input;
pub mod mutation;
pub mod schedule;

pub use generator::InstanceGenerator;
pub use input::ScheduleInput;
pub use mutation::ReassignMutation;
pub use schedule::Schedule;
