//! # Parallel Annealing
//!
//! The engine coordinates a fixed pool of search workers across generations. Each
//! generation every worker runs one [`SearchWorker`] trajectory from the current global
//! best, the local bests are collected in a [`SearchRegistry`], and the generation best
//! replaces the global best when it is strictly better.

pub mod builder;
pub mod engine;
pub mod options;
pub mod registry;
pub mod worker;

pub use builder::AnnealingBuilder;
pub use engine::{Annealing, AnnealingResult};
pub use options::{AnnealingOptions, AnnealingOptionsBuilder};
pub use registry::{LocalBest, SearchRegistry};
pub use worker::{metropolis_accept, SearchWorker, Trajectory};
