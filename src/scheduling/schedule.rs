use std::sync::Arc;

use crate::{
    error::{AnnealingError, Result},
    rng::RandomNumberGenerator,
    solution::Solution,
};

pub(crate) fn validate_instance(workers: usize, durations: &[u64]) -> Result<()> {
    if workers == 0 {
        return Err(AnnealingError::Configuration(
            "Number of workers must be greater than 0".to_string(),
        ));
    }
    if durations.is_empty() {
        return Err(AnnealingError::Configuration(
            "At least one work item is required".to_string(),
        ));
    }
    if let Some(item) = durations.iter().position(|&d| d == 0) {
        return Err(AnnealingError::Configuration(format!(
            "Work item {} has zero duration",
            item
        )));
    }
    // Any worker load is bounded by the total, so a representable total keeps loads exact
    if durations
        .iter()
        .try_fold(0u64, |total, &d| total.checked_add(d))
        .is_none()
    {
        return Err(AnnealingError::Configuration(
            "Total duration of all work items overflows u64".to_string(),
        ));
    }
    Ok(())
}

/// An assignment of work items to workers.
///
/// Durations are shared between all schedules derived from the same instance; only the
/// assignment vector is copied when a neighbor is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    workers: usize,
    durations: Arc<[u64]>,
    /// `assignment[item]` is the worker running `item`.
    assignment: Vec<usize>,
}

impl Schedule {
    /// Creates a seed schedule placing every item on one randomly chosen worker.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if there are no workers, no items, an item with
    /// zero duration, or a total duration that does not fit in a `u64`.
    pub fn new(workers: usize, durations: Vec<u64>, rng: &mut RandomNumberGenerator) -> Result<Self> {
        validate_instance(workers, &durations)?;
        let worker = rng.gen_index(workers);
        let assignment = vec![worker; durations.len()];

        Ok(Self {
            workers,
            durations: durations.into(),
            assignment,
        })
    }

    /// Creates a schedule with an explicit assignment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid instance, and an invalid input
    /// error if the assignment has the wrong length or names a missing worker.
    pub fn with_assignment(
        workers: usize,
        durations: Vec<u64>,
        assignment: Vec<usize>,
    ) -> Result<Self> {
        validate_instance(workers, &durations)?;
        if assignment.len() != durations.len() {
            return Err(AnnealingError::InvalidInput(format!(
                "Assignment covers {} items, expected {}",
                assignment.len(),
                durations.len()
            )));
        }
        if let Some((item, worker)) = assignment
            .iter()
            .enumerate()
            .find(|&(_, &worker)| worker >= workers)
        {
            return Err(AnnealingError::InvalidInput(format!(
                "Item {} assigned to worker {}, but only {} workers exist",
                item, worker, workers
            )));
        }

        Ok(Self {
            workers,
            durations: durations.into(),
            assignment,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn durations(&self) -> &[u64] {
        &self.durations
    }

    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// Number of work items.
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    /// Returns the worker running `item`.
    pub fn worker_of(&self, item: usize) -> Option<usize> {
        self.assignment.get(item).copied()
    }

    /// Total duration assigned to each worker.
    pub fn loads(&self) -> Vec<u64> {
        let mut loads = vec![0; self.workers];
        for (item, &worker) in self.assignment.iter().enumerate() {
            loads[worker] += self.durations[item];
        }
        loads
    }

    /// Items of each worker, longest first.
    pub fn get_schedule(&self) -> Vec<Vec<usize>> {
        let mut schedule = vec![Vec::new(); self.workers];
        for (item, &worker) in self.assignment.iter().enumerate() {
            schedule[worker].push(item);
        }
        for items in &mut schedule {
            items.sort_by(|&a, &b| self.durations[b].cmp(&self.durations[a]));
        }
        schedule
    }

    /// Returns a copy with `item` moved to `worker`.
    pub(crate) fn reassigned(&self, item: usize, worker: usize) -> Self {
        let mut assignment = self.assignment.clone();
        assignment[item] = worker;
        Self {
            workers: self.workers,
            durations: Arc::clone(&self.durations),
            assignment,
        }
    }
}

impl Solution for Schedule {
    /// Busiest worker's load minus the smallest "heaviest item" over all workers.
    ///
    /// A worker without items has a heaviest item of 0.
    fn criterion(&self) -> f64 {
        let mut loads = vec![0u64; self.workers];
        let mut heaviest = vec![0u64; self.workers];

        for (item, &worker) in self.assignment.iter().enumerate() {
            let duration = self.durations[item];
            loads[worker] += duration;
            heaviest[worker] = heaviest[worker].max(duration);
        }

        let max_load = loads.iter().copied().max().unwrap_or(0);
        let min_heaviest = heaviest.iter().copied().min().unwrap_or(0);

        max_load as f64 - min_heaviest as f64
    }
}
