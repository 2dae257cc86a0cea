use std::sync::Arc;

use crate::{
    cooldown::Cooldown, mutation::Mutation, rng::RandomNumberGenerator, solution::Solution,
};

/// The outcome of one annealing trajectory.
#[derive(Debug, Clone)]
pub struct Trajectory<S: Solution> {
    /// The best solution observed along the trajectory.
    pub best: Arc<S>,
    /// Cached criterion of `best`.
    pub criterion: f64,
    /// Number of mutate/accept steps performed.
    pub iterations: usize,
}

/// Metropolis acceptance test.
///
/// `delta` is `current - candidate`, so a non-negative value means the candidate is at
/// least as good and is always accepted. A worse candidate is accepted with probability
/// `exp(delta / temperature)`. A NaN `delta` is never accepted.
pub fn metropolis_accept(delta: f64, temperature: f64, rng: &mut RandomNumberGenerator) -> bool {
    delta >= 0.0 || rng.gen_probability() < (delta / temperature).exp()
}

/// Runs single-threaded annealing trajectories.
///
/// A worker borrows the engine's strategies; it owns nothing but its stall threshold.
#[derive(Debug)]
pub struct SearchWorker<'a, M, C> {
    mutation: &'a M,
    cooldown: &'a C,
    stall_threshold: usize,
}

impl<'a, M, C> SearchWorker<'a, M, C>
where
    C: Cooldown,
{
    pub fn new(mutation: &'a M, cooldown: &'a C, stall_threshold: usize) -> Self {
        Self {
            mutation,
            cooldown,
            stall_threshold,
        }
    }

    /// Anneals from `start` until `stall_threshold` consecutive steps fail to improve on
    /// the trajectory's best, and returns that best.
    ///
    /// The best never gets worse than `start`: it is only replaced by a strictly lower
    /// criterion.
    pub fn run<S>(&self, start: Arc<S>, rng: &mut RandomNumberGenerator) -> Trajectory<S>
    where
        S: Solution,
        M: Mutation<S>,
    {
        let mut current_criterion = start.criterion();
        let mut current = Arc::clone(&start);
        let mut best_criterion = current_criterion;
        let mut best = start;

        let mut stall = 0;
        let mut iteration = 0;

        while stall < self.stall_threshold {
            let candidate = self.mutation.mutate(&current, rng);
            let candidate_criterion = candidate.criterion();

            let temperature = self.cooldown.get_temp(iteration);
            let delta = current_criterion - candidate_criterion;

            if metropolis_accept(delta, temperature, rng) {
                current = Arc::new(candidate);
                current_criterion = candidate_criterion;
            }

            if current_criterion < best_criterion {
                best = Arc::clone(&current);
                best_criterion = current_criterion;
                stall = 0;
            } else {
                stall += 1;
            }

            iteration += 1;
        }

        Trajectory {
            best,
            criterion: best_criterion,
            iterations: iteration,
        }
    }
}
