//! # AnnealingOptions
//!
//! The `AnnealingOptions` struct holds the configuration of the parallel annealing engine:
//! the size of the worker pool, the two stall thresholds that decide convergence and an
//! optional cap on the number of generations.
//!
//! ## Example
//!
//! ```rust
//! use annealing::annealing::options::AnnealingOptions;
//!
//! // Four workers, trajectories stop after 10 idle steps, the engine after 10 idle generations
//! let options = AnnealingOptions::new(4, 10, 10);
//! assert!(options.validate().is_ok());
//!
//! let default_options = AnnealingOptions::default();
//! assert_eq!(default_options.get_generation_stall(), 10);
//! ```
//!
//! ## Fields
//!
//! - `workers`: number of parallel trajectories per generation (and pool threads).
//! - `trajectory_stall`: consecutive non-improving steps after which a trajectory stops.
//! - `generation_stall`: consecutive non-improving generations after which the engine stops.
//! - `max_generations`: optional hard cap on the number of generations.

use crate::error::{AnnealingError, Result};

const DEFAULT_WORKERS: usize = 4;
const DEFAULT_STALL: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingOptions {
    workers: usize,
    trajectory_stall: usize,
    generation_stall: usize,
    /// Upper bound on generations; `None` runs until the stall rule fires.
    max_generations: Option<usize>,
}

impl AnnealingOptions {
    pub fn new(workers: usize, trajectory_stall: usize, generation_stall: usize) -> Self {
        Self {
            workers,
            trajectory_stall,
            generation_stall,
            max_generations: None,
        }
    }

    /// Creates a new `AnnealingOptions` instance with all parameters specified.
    pub fn new_with_limit(
        workers: usize,
        trajectory_stall: usize,
        generation_stall: usize,
        max_generations: usize,
    ) -> Self {
        Self {
            workers,
            trajectory_stall,
            generation_stall,
            max_generations: Some(max_generations),
        }
    }

    pub fn get_workers(&self) -> usize {
        self.workers
    }

    pub fn get_trajectory_stall(&self) -> usize {
        self.trajectory_stall
    }

    pub fn get_generation_stall(&self) -> usize {
        self.generation_stall
    }

    pub fn get_max_generations(&self) -> Option<usize> {
        self.max_generations
    }

    /// Sets the number of workers.
    pub fn set_workers(&mut self, workers: usize) {
        self.workers = workers;
    }

    /// Sets the per-trajectory stall threshold.
    pub fn set_trajectory_stall(&mut self, trajectory_stall: usize) {
        self.trajectory_stall = trajectory_stall;
    }

    /// Sets the per-generation stall threshold.
    pub fn set_generation_stall(&mut self, generation_stall: usize) {
        self.generation_stall = generation_stall;
    }

    /// Sets or clears the generation cap.
    pub fn set_max_generations(&mut self, max_generations: Option<usize>) {
        self.max_generations = max_generations;
    }

    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the worker count, either stall threshold or
    /// the generation cap is zero.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(AnnealingError::Configuration(
                "Number of workers must be greater than 0".to_string(),
            ));
        }
        if self.trajectory_stall == 0 {
            return Err(AnnealingError::Configuration(
                "Trajectory stall threshold must be greater than 0".to_string(),
            ));
        }
        if self.generation_stall == 0 {
            return Err(AnnealingError::Configuration(
                "Generation stall threshold must be greater than 0".to_string(),
            ));
        }
        if self.max_generations == Some(0) {
            return Err(AnnealingError::Configuration(
                "Maximum generations must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a builder for creating an `AnnealingOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use annealing::annealing::options::AnnealingOptions;
    ///
    /// let options = AnnealingOptions::builder()
    ///     .workers(8)
    ///     .trajectory_stall(100)
    ///     .generation_stall(10)
    ///     .max_generations(500)
    ///     .build();
    /// assert_eq!(options.get_workers(), 8);
    /// ```
    pub fn builder() -> AnnealingOptionsBuilder {
        AnnealingOptionsBuilder::default()
    }
}

impl Default for AnnealingOptions {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS, DEFAULT_STALL, DEFAULT_STALL)
    }
}

/// Builder for `AnnealingOptions`.
#[derive(Debug, Clone, Default)]
pub struct AnnealingOptionsBuilder {
    workers: Option<usize>,
    trajectory_stall: Option<usize>,
    generation_stall: Option<usize>,
    max_generations: Option<usize>,
}

impl AnnealingOptionsBuilder {
    /// Sets the number of workers.
    pub fn workers(mut self, value: usize) -> Self {
        self.workers = Some(value);
        self
    }

    /// Sets the per-trajectory stall threshold.
    pub fn trajectory_stall(mut self, value: usize) -> Self {
        self.trajectory_stall = Some(value);
        self
    }

    /// Sets the per-generation stall threshold.
    pub fn generation_stall(mut self, value: usize) -> Self {
        self.generation_stall = Some(value);
        self
    }

    /// Caps the number of generations.
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Builds the `AnnealingOptions` instance.
    pub fn build(self) -> AnnealingOptions {
        AnnealingOptions {
            workers: self.workers.unwrap_or(DEFAULT_WORKERS),
            trajectory_stall: self.trajectory_stall.unwrap_or(DEFAULT_STALL),
            generation_stall: self.generation_stall.unwrap_or(DEFAULT_STALL),
            max_generations: self.max_generations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AnnealingOptions::default();
        assert_eq!(options.get_workers(), 4);
        assert_eq!(options.get_trajectory_stall(), 10);
        assert_eq!(options.get_generation_stall(), 10);
        assert_eq!(options.get_max_generations(), None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_matches_constructor() {
        let built = AnnealingOptions::builder()
            .workers(2)
            .trajectory_stall(100)
            .generation_stall(5)
            .max_generations(50)
            .build();
        assert_eq!(built, AnnealingOptions::new_with_limit(2, 100, 5, 50));
    }

    #[test]
    fn test_setters() {
        let mut options = AnnealingOptions::default();
        options.set_workers(3);
        options.set_trajectory_stall(7);
        options.set_generation_stall(8);
        options.set_max_generations(Some(9));
        assert_eq!(options, AnnealingOptions::new_with_limit(3, 7, 8, 9));
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let cases = [
            (AnnealingOptions::new(0, 10, 10), "workers"),
            (AnnealingOptions::new(1, 0, 10), "Trajectory"),
            (AnnealingOptions::new(1, 10, 0), "Generation"),
            (AnnealingOptions::new_with_limit(1, 10, 10, 0), "Maximum generations"),
        ];

        for (options, needle) in cases {
            match options.validate() {
                Err(AnnealingError::Configuration(msg)) => assert!(msg.contains(needle), "{}", msg),
                other => panic!("Expected Configuration error, got {:?}", other),
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let options = AnnealingOptions::new_with_limit(2, 3, 4, 5);
        let json = serde_json::to_string(&options).unwrap();
        let back: AnnealingOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, back);
    }
}
