use std::sync::{Arc, Mutex, PoisonError};

use crate::solution::Solution;

/// A local best reported by one worker.
#[derive(Debug, Clone)]
pub struct LocalBest<S: Solution> {
    /// Index of the reporting worker within its generation.
    pub worker: usize,
    pub solution: Arc<S>,
    pub criterion: f64,
}

impl<S: Solution> LocalBest<S> {
    // Lower criterion wins, equal criteria go to the lower worker index. NaN loses to any
    // number and ties with NaN.
    fn beats(&self, other: &Self) -> bool {
        match (self.criterion.is_nan(), other.criterion.is_nan()) {
            (true, true) => self.worker < other.worker,
            (true, false) => false,
            (false, true) => true,
            (false, false) => {
                self.criterion < other.criterion
                    || (self.criterion == other.criterion && self.worker < other.worker)
            }
        }
    }
}

/// Collects the local bests of one generation.
///
/// Workers submit concurrently; every submission takes the lock once. The engine drains
/// the registry after the generation barrier, which also clears it for the next one.
#[derive(Debug)]
pub struct SearchRegistry<S: Solution> {
    entries: Mutex<Vec<LocalBest<S>>>,
}

impl<S: Solution> SearchRegistry<S> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    /// Records a worker's local best.
    pub fn submit(&self, entry: LocalBest<S>) {
        // A panicking worker unwinds through the scope anyway; the data stays valid.
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry and returns the generation best, if any.
    ///
    /// The result does not depend on submission order.
    pub fn drain_best(&self) -> Option<LocalBest<S>> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let best = entries.drain(..).reduce(|best, entry| {
            if entry.beats(&best) {
                entry
            } else {
                best
            }
        });
        best
    }
}
