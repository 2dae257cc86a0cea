//! # Error Types
//!
//! This module defines the error type of the annealing library. Configuration
//! problems are reported when an engine, a cooling schedule or a problem
//! instance is constructed, never halfway through a search.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use annealing::error::{AnnealingError, Result};
//!
//! fn validate_workers(workers: usize) -> Result<usize> {
//!     if workers == 0 {
//!         return Err(AnnealingError::Configuration(
//!             "Number of workers must be greater than 0".to_string(),
//!         ));
//!     }
//!     Ok(workers)
//! }
//!
//! assert!(validate_workers(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use annealing::error::{AnnealingError, OptionExt};
//!
//! fn cheapest(costs: &[u64]) -> annealing::error::Result<u64> {
//!     costs.iter().min().copied().ok_or_else_annealing(|| AnnealingError::EmptyRegistry)
//! }
//!
//! assert_eq!(cheapest(&[3, 1, 2]).unwrap(), 1);
//! ```
//!
//! Using the `?` operator with automatic error conversion:
//!
//! ```rust
//! use annealing::error::Result;
//! use std::fs;
//!
//! fn read_instance(path: &str) -> Result<String> {
//!     let contents = fs::read_to_string(path)?; // io::Error converts to AnnealingError
//!     Ok(contents)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur in the annealing library.
#[derive(Error, Debug)]
pub enum AnnealingError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a problem instance cannot be parsed or is malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error that occurs when a generation finishes without any worker result.
    #[error("Empty registry: no worker reported a local best")]
    EmptyRegistry,

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for annealing operations.
pub type Result<T> = std::result::Result<T, AnnealingError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use annealing::error::ResultExt;
/// use std::fs::File;
///
/// fn open_instance(path: &str) -> annealing::error::Result<()> {
///     File::open(path).context("Failed to open instance file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to an `AnnealingError` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| AnnealingError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, AnnealingError>` using `err_fn`
    /// to build the error.
    fn ok_or_else_annealing<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> AnnealingError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_annealing<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> AnnealingError,
    {
        self.ok_or_else(err_fn)
    }
}
