use crate::{mutation::Mutation, rng::RandomNumberGenerator};

use super::Schedule;

/// Moves one random work item to a different, uniformly chosen worker.
///
/// With a single worker there is nowhere to move an item, and the input is returned
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReassignMutation;

impl Mutation<Schedule> for ReassignMutation {
    fn mutate(&self, schedule: &Schedule, rng: &mut RandomNumberGenerator) -> Schedule {
        let workers = schedule.workers();
        if workers <= 1 || schedule.is_empty() {
            return schedule.clone();
        }

        let item = rng.gen_index(schedule.len());
        let source = schedule.assignment()[item];

        // Draw among the other workers by skipping over the source
        let mut target = rng.gen_index(workers - 1);
        if target >= source {
            target += 1;
        }

        schedule.reassigned(item, target)
    }
}
