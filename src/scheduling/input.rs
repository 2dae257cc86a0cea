use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::{
    error::{AnnealingError, Result, ResultExt},
    rng::RandomNumberGenerator,
};

use super::Schedule;

/// A scheduling instance in its flat-text form.
///
/// The format is a single comma-separated line: the worker count followed by the
/// duration of every work item, e.g. `2,5,3,2`.
///
/// ```rust
/// use annealing::scheduling::ScheduleInput;
///
/// let input: ScheduleInput = "2,5,3,2".parse().unwrap();
/// assert_eq!(input.workers, 2);
/// assert_eq!(input.durations, vec![5, 3, 2]);
/// assert_eq!(input.to_string(), "2,5,3,2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleInput {
    pub workers: usize,
    pub durations: Vec<u64>,
}

impl ScheduleInput {
    pub fn new(workers: usize, durations: Vec<u64>) -> Self {
        Self { workers, durations }
    }

    /// Reads an instance from a file.
    ///
    /// # Errors
    ///
    /// Returns an error naming the file if it cannot be read, and an invalid input
    /// error if its contents do not parse.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read instance {}", path.display()))?;
        contents.parse()
    }

    /// Writes the instance as a single line.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, format!("{}\n", self))
            .context(format!("Failed to write instance {}", path.display()))
    }

    /// Builds a seed schedule for this instance.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the instance has no workers, no items, an item
    /// with zero duration, or durations whose total overflows a `u64`.
    pub fn seed(&self, rng: &mut RandomNumberGenerator) -> Result<Schedule> {
        Schedule::new(self.workers, self.durations.clone(), rng)
    }
}

impl FromStr for ScheduleInput {
    type Err = AnnealingError;

    fn from_str(s: &str) -> Result<Self> {
        let line = s.trim();
        if line.is_empty() {
            return Err(AnnealingError::InvalidInput("Input is empty".to_string()));
        }
        // One trailing separator is tolerated, as written by line-oriented generators
        let line = line.strip_suffix(',').unwrap_or(line);

        let mut fields = line.split(',').map(str::trim);

        let workers = fields
            .next()
            .unwrap_or_default()
            .parse::<usize>()
            .map_err(|e| AnnealingError::InvalidInput(format!("Invalid worker count: {}", e)))?;

        let durations = fields
            .enumerate()
            .map(|(item, field)| {
                field.parse::<u64>().map_err(|e| {
                    AnnealingError::InvalidInput(format!(
                        "Invalid duration {:?} for item {}: {}",
                        field, item, e
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { workers, durations })
    }
}

impl fmt::Display for ScheduleInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.workers)?;
        for duration in &self.durations {
            write!(f, ",{}", duration)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::Solution;

    #[test]
    fn test_parse_with_whitespace_and_newline() {
        let input: ScheduleInput = " 3, 10 ,20,30\n".parse().unwrap();
        assert_eq!(input, ScheduleInput::new(3, vec![10, 20, 30]));
    }

    #[test]
    fn test_parse_trailing_comma() {
        let input: ScheduleInput = "2,5,3,\n".parse().unwrap();
        assert_eq!(input, ScheduleInput::new(2, vec![5, 3]));

        let workers_only: ScheduleInput = "4,".parse().unwrap();
        assert_eq!(workers_only, ScheduleInput::new(4, vec![]));
    }

    #[test]
    fn test_parse_errors() {
        for text in ["", "   \n", ",", "x,1,2", "2,1,,3", "2,5,,", "2,1,-4", "2;1;3"] {
            assert!(
                matches!(text.parse::<ScheduleInput>(), Err(AnnealingError::InvalidInput(_))),
                "{:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn test_seed_rejects_degenerate_instances() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let no_items: ScheduleInput = "2".parse().unwrap();
        let no_workers: ScheduleInput = "0,1,2".parse().unwrap();

        assert!(matches!(no_items.seed(&mut rng), Err(AnnealingError::Configuration(_))));
        assert!(matches!(no_workers.seed(&mut rng), Err(AnnealingError::Configuration(_))));
    }

    #[test]
    fn test_seed_rejects_overflowing_durations() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let input: ScheduleInput = "2,18446744073709551615,1".parse().unwrap();

        assert!(matches!(input.seed(&mut rng), Err(AnnealingError::Configuration(_))));
    }

    #[test]
    fn test_seed_schedule() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let schedule = ScheduleInput::new(2, vec![5, 3, 2]).seed(&mut rng).unwrap();

        assert_eq!(schedule.workers(), 2);
        assert_eq!(schedule.durations(), &[5, 3, 2]);
        assert_eq!(schedule.criterion(), 10.0);
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("annealing-input-{}.txt", std::process::id()));
        let input = ScheduleInput::new(4, vec![7, 1, 8]);

        input.write_to(&path).unwrap();
        let read_back = ScheduleInput::from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(read_back, input);
    }

    #[test]
    fn test_missing_file_names_path() {
        match ScheduleInput::from_path("/definitely/not/here.txt") {
            Err(AnnealingError::Other(msg)) => {
                assert!(msg.starts_with("Failed to read instance /definitely/not/here.txt: "), "{}", msg)
            }
            other => panic!("Expected an error naming the file, got {:?}", other),
        }
    }

    #[test]
    fn test_unwritable_path_names_path() {
        let input = ScheduleInput::new(2, vec![1]);
        let err = input.write_to("/definitely/not/here/out.txt").unwrap_err();
        assert!(err.to_string().contains("Failed to write instance /definitely/not/here/out.txt"));
    }
}
