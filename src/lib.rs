pub mod annealing;
pub mod cooldown;
pub mod error;
pub mod mutation;
pub mod rng;
pub mod scheduling;
pub mod solution;

// Re-export commonly used types for convenience
pub use annealing::{Annealing, AnnealingBuilder, AnnealingOptions, AnnealingResult};
pub use cooldown::{BasicCooldown, Boltzmann, Cauchy, Cooldown, LogCauchy};
pub use error::{AnnealingError, OptionExt, Result, ResultExt};
pub use mutation::Mutation;
pub use solution::Solution;
