//! # Cooldown Strategies
//!
//! A cooldown maps an iteration index to a temperature. All schedules return their
//! initial temperature at iteration 0 and stay strictly positive for every finite
//! iteration, so the Metropolis test never divides by zero.
//!
//! | Schedule    | `get_temp(it)`, `it >= 1`      |
//! |-------------|--------------------------------|
//! | `Boltzmann` | `t0 / ln(1 + it)`              |
//! | `Cauchy`    | `t0 / (1 + it)`                |
//! | `LogCauchy` | `t0 * ln(1 + it) / (1 + it)`   |
//!
//! ## Example
//!
//! ```rust
//! use annealing::cooldown::{Cauchy, Cooldown};
//!
//! let cooldown = Cauchy::new(100.0).unwrap();
//! assert_eq!(cooldown.get_temp(0), 100.0);
//! assert_eq!(cooldown.get_temp(1), 50.0);
//! ```

use std::fmt::Debug;

use crate::error::{AnnealingError, Result};

/// A cooling schedule.
pub trait Cooldown: Debug + Send + Sync {
    /// Returns the temperature used at iteration 0.
    fn initial_temperature(&self) -> f64;

    /// Returns the temperature for the given iteration.
    fn get_temp(&self, iteration: usize) -> f64;
}

fn validate_temperature(initial_temperature: f64) -> Result<f64> {
    if !initial_temperature.is_finite() || initial_temperature <= 0.0 {
        return Err(AnnealingError::Configuration(format!(
            "Initial temperature must be positive and finite, got {}",
            initial_temperature
        )));
    }
    Ok(initial_temperature)
}

/// Boltzmann law: `t0 / ln(1 + it)`.
///
/// Note that `get_temp(1)` is larger than `t0`; the schedule decreases from there on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boltzmann {
    temp0: f64,
}

impl Boltzmann {
    /// Creates a Boltzmann schedule.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `initial_temperature` is not positive and finite.
    pub fn new(initial_temperature: f64) -> Result<Self> {
        Ok(Self {
            temp0: validate_temperature(initial_temperature)?,
        })
    }
}

impl Cooldown for Boltzmann {
    fn initial_temperature(&self) -> f64 {
        self.temp0
    }

    fn get_temp(&self, iteration: usize) -> f64 {
        if iteration == 0 {
            return self.temp0;
        }
        self.temp0 / (1.0 + iteration as f64).ln()
    }
}

/// Cauchy law: `t0 / (1 + it)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cauchy {
    temp0: f64,
}

impl Cauchy {
    /// Creates a Cauchy schedule.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `initial_temperature` is not positive and finite.
    pub fn new(initial_temperature: f64) -> Result<Self> {
        Ok(Self {
            temp0: validate_temperature(initial_temperature)?,
        })
    }
}

impl Cooldown for Cauchy {
    fn initial_temperature(&self) -> f64 {
        self.temp0
    }

    fn get_temp(&self, iteration: usize) -> f64 {
        if iteration == 0 {
            return self.temp0;
        }
        self.temp0 / (1.0 + iteration as f64)
    }
}

/// Log-Cauchy law: `t0 * ln(1 + it) / (1 + it)`.
///
/// `ln(x) / x` peaks at `x = e`, so the schedule is only decreasing from iteration 2 on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogCauchy {
    temp0: f64,
}

impl LogCauchy {
    /// Creates a Log-Cauchy schedule.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `initial_temperature` is not positive and finite.
    pub fn new(initial_temperature: f64) -> Result<Self> {
        Ok(Self {
            temp0: validate_temperature(initial_temperature)?,
        })
    }
}

impl Cooldown for LogCauchy {
    fn initial_temperature(&self) -> f64 {
        self.temp0
    }

    fn get_temp(&self, iteration: usize) -> f64 {
        if iteration == 0 {
            return self.temp0;
        }
        let next = 1.0 + iteration as f64;
        self.temp0 * next.ln() / next
    }
}

/// One of the built-in schedules, chosen at runtime.
///
/// ```rust
/// use annealing::cooldown::{BasicCooldown, Cooldown};
///
/// for cooldown in BasicCooldown::all(1000.0).unwrap() {
///     assert_eq!(cooldown.get_temp(0), 1000.0);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BasicCooldown {
    Boltzmann(Boltzmann),
    Cauchy(Cauchy),
    LogCauchy(LogCauchy),
}

impl BasicCooldown {
    /// Returns the three built-in schedules sharing one initial temperature.
    pub fn all(initial_temperature: f64) -> Result<[BasicCooldown; 3]> {
        Ok([
            BasicCooldown::Boltzmann(Boltzmann::new(initial_temperature)?),
            BasicCooldown::Cauchy(Cauchy::new(initial_temperature)?),
            BasicCooldown::LogCauchy(LogCauchy::new(initial_temperature)?),
        ])
    }

    /// Returns a short name for the schedule.
    pub fn name(&self) -> &'static str {
        match self {
            BasicCooldown::Boltzmann(_) => "boltzmann",
            BasicCooldown::Cauchy(_) => "cauchy",
            BasicCooldown::LogCauchy(_) => "log-cauchy",
        }
    }
}

impl Cooldown for BasicCooldown {
    fn initial_temperature(&self) -> f64 {
        match self {
            BasicCooldown::Boltzmann(c) => c.initial_temperature(),
            BasicCooldown::Cauchy(c) => c.initial_temperature(),
            BasicCooldown::LogCauchy(c) => c.initial_temperature(),
        }
    }

    fn get_temp(&self, iteration: usize) -> f64 {
        match self {
            BasicCooldown::Boltzmann(c) => c.get_temp(iteration),
            BasicCooldown::Cauchy(c) => c.get_temp(iteration),
            BasicCooldown::LogCauchy(c) => c.get_temp(iteration),
        }
    }
}
