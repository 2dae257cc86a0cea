use crate::{
    error::{AnnealingError, Result},
    rng::RandomNumberGenerator,
};

use super::ScheduleInput;

/// Generates random scheduling instances with uniformly distributed durations.
///
/// ```rust
/// use annealing::rng::RandomNumberGenerator;
/// use annealing::scheduling::InstanceGenerator;
///
/// let generator = InstanceGenerator::new(4, 100, 1, 50).unwrap();
/// let input = generator.generate(&mut RandomNumberGenerator::from_seed(1));
/// assert_eq!(input.workers, 4);
/// assert_eq!(input.durations.len(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceGenerator {
    workers: usize,
    items: usize,
    min_duration: u64,
    max_duration: u64,
}

impl InstanceGenerator {
    /// # Errors
    ///
    /// Returns a configuration error unless `workers > 0`, `items > 0` and
    /// `0 < min_duration <= max_duration`.
    pub fn new(workers: usize, items: usize, min_duration: u64, max_duration: u64) -> Result<Self> {
        if workers == 0 {
            return Err(AnnealingError::Configuration(
                "Number of workers must be greater than 0".to_string(),
            ));
        }
        if items == 0 {
            return Err(AnnealingError::Configuration(
                "Number of work items must be greater than 0".to_string(),
            ));
        }
        if min_duration == 0 || min_duration > max_duration {
            return Err(AnnealingError::Configuration(format!(
                "Duration range must satisfy 0 < min <= max, got {}..={}",
                min_duration, max_duration
            )));
        }

        Ok(Self {
            workers,
            items,
            min_duration,
            max_duration,
        })
    }

    pub fn generate(&self, rng: &mut RandomNumberGenerator) -> ScheduleInput {
        let durations = (0..self.items)
            .map(|_| rng.gen_inclusive(self.min_duration, self.max_duration))
            .collect();
        ScheduleInput::new(self.workers, durations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_within_range() {
        let generator = InstanceGenerator::new(3, 200, 5, 9).unwrap();
        let input = generator.generate(&mut RandomNumberGenerator::from_seed(4));

        assert_eq!(input.workers, 3);
        assert_eq!(input.durations.len(), 200);
        assert!(input.durations.iter().all(|d| (5..=9).contains(d)));
    }

    #[test]
    fn test_generated_instance_seeds() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let input = InstanceGenerator::new(2, 10, 1, 1).unwrap().generate(&mut rng);

        assert_eq!(input.to_string(), "2,1,1,1,1,1,1,1,1,1,1");
        assert!(input.seed(&mut rng).is_ok());
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(InstanceGenerator::new(0, 1, 1, 2).is_err());
        assert!(InstanceGenerator::new(1, 0, 1, 2).is_err());
        assert!(InstanceGenerator::new(1, 1, 0, 2).is_err());
        assert!(InstanceGenerator::new(1, 1, 3, 2).is_err());
    }
}
