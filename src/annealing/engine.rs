use std::marker::PhantomData;
use std::sync::Arc;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info, trace};

use super::{
    options::AnnealingOptions,
    registry::{LocalBest, SearchRegistry},
    worker::SearchWorker,
};
use crate::{
    cooldown::Cooldown,
    error::{AnnealingError, OptionExt, Result},
    mutation::Mutation,
    rng::RandomNumberGenerator,
    solution::Solution,
};

/// Represents the result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult<S: Solution> {
    /// The global best solution.
    pub solution: Arc<S>,
    /// The criterion of `solution`.
    pub criterion: f64,
    /// Number of generations that were run.
    pub generations: usize,
    /// Global best criterion after each generation. Never increases.
    pub history: Vec<f64>,
}

/// Parallel simulated annealing engine.
///
/// Every generation launches one trajectory per worker, all starting from the current
/// global best, waits for all of them, and keeps the best local result if it improves on
/// the global best. The run ends once `generation_stall` consecutive generations bring no
/// improvement, or when the optional generation cap is reached.
#[derive(Debug)]
pub struct Annealing<S, M, C>
where
    S: Solution,
    M: Mutation<S>,
    C: Cooldown,
{
    mutation: M,
    cooldown: C,
    options: AnnealingOptions,
    pool: ThreadPool,
    _marker: PhantomData<S>,
}

impl<S, M, C> Annealing<S, M, C>
where
    S: Solution,
    M: Mutation<S>,
    C: Cooldown,
{
    /// Creates a new engine with a dedicated pool of `options.get_workers()` threads.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the options are invalid or the thread pool
    /// cannot be created.
    pub fn new(mutation: M, cooldown: C, options: AnnealingOptions) -> Result<Self> {
        options.validate()?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(options.get_workers())
            .thread_name(|index| format!("annealing-worker-{}", index))
            .build()
            .map_err(|e| {
                AnnealingError::Configuration(format!("Failed to build worker pool: {}", e))
            })?;

        Ok(Self {
            mutation,
            cooldown,
            options,
            pool,
            _marker: PhantomData,
        })
    }

    pub fn options(&self) -> &AnnealingOptions {
        &self.options
    }

    pub fn mutation(&self) -> &M {
        &self.mutation
    }

    pub fn cooldown(&self) -> &C {
        &self.cooldown
    }

    /// Searches from `seed` with an entropy-seeded generator. Blocks until convergence.
    pub fn run(&self, seed: S) -> Result<AnnealingResult<S>> {
        let mut rng = RandomNumberGenerator::new();
        self.run_with_rng(seed, &mut rng)
    }

    /// Searches from `seed`, deriving every worker generator from `rng`.
    ///
    /// With a seeded `rng` the run is reproducible: each worker gets its own generator
    /// seeded from `rng`, and the generation reduction does not depend on the order in
    /// which workers finish.
    ///
    /// # Errors
    ///
    /// Returns [`AnnealingError::EmptyRegistry`] if a generation yields no result.
    /// A panic inside a strategy is not caught; it resumes on the calling thread.
    pub fn run_with_rng(
        &self,
        seed: S,
        rng: &mut RandomNumberGenerator,
    ) -> Result<AnnealingResult<S>> {
        let workers = self.options.get_workers();
        let trajectory_stall = self.options.get_trajectory_stall();
        let registry = SearchRegistry::with_capacity(workers);

        let mut global_criterion = seed.criterion();
        let mut global_best = Arc::new(seed);
        let mut history = Vec::new();
        let mut stall = 0;
        let mut generation = 0;

        info!(workers, criterion = global_criterion, "starting annealing");

        while stall < self.options.get_generation_stall() {
            if let Some(max) = self.options.get_max_generations() {
                if generation >= max {
                    info!(generation, "generation limit reached");
                    break;
                }
            }

            let seeds: Vec<u64> = (0..workers).map(|_| rng.next_seed()).collect();

            self.pool.scope(|scope| {
                for (worker, worker_seed) in seeds.into_iter().enumerate() {
                    let start = Arc::clone(&global_best);
                    let registry = &registry;

                    scope.spawn(move |_| {
                        let mut rng = RandomNumberGenerator::from_seed(worker_seed);
                        let trajectory =
                            SearchWorker::new(&self.mutation, &self.cooldown, trajectory_stall)
                                .run(start, &mut rng);

                        trace!(
                            generation,
                            worker,
                            criterion = trajectory.criterion,
                            iterations = trajectory.iterations,
                            "trajectory finished"
                        );

                        registry.submit(LocalBest {
                            worker,
                            solution: trajectory.best,
                            criterion: trajectory.criterion,
                        });
                    });
                }
            });

            let generation_best = registry
                .drain_best()
                .ok_or_else_annealing(|| AnnealingError::EmptyRegistry)?;

            if generation_best.criterion < global_criterion {
                global_best = generation_best.solution;
                global_criterion = generation_best.criterion;
                stall = 0;
            } else {
                stall += 1;
            }

            debug!(
                generation,
                generation_best = generation_best.criterion,
                global_best = global_criterion,
                stall,
                "generation finished"
            );

            history.push(global_criterion);
            generation += 1;
        }

        info!(
            generations = generation,
            criterion = global_criterion,
            "annealing finished"
        );

        Ok(AnnealingResult {
            solution: global_best,
            criterion: global_criterion,
            generations: generation,
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cooldown::Cauchy;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[derive(Debug, Clone)]
    struct Walker {
        position: i64,
    }

    impl Solution for Walker {
        fn criterion(&self) -> f64 {
            self.position.abs() as f64
        }
    }

    #[derive(Debug)]
    struct RandomStep;

    impl Mutation<Walker> for RandomStep {
        fn mutate(&self, solution: &Walker, rng: &mut RandomNumberGenerator) -> Walker {
            let delta = if rng.gen_probability() < 0.5 { -1 } else { 1 };
            Walker {
                position: solution.position + delta,
            }
        }
    }

    // Records which threads ran trajectories
    #[derive(Debug, Default)]
    struct CountingStep {
        calls: AtomicUsize,
        threads: std::sync::Mutex<std::collections::HashSet<thread::ThreadId>>,
    }

    impl Mutation<Walker> for CountingStep {
        fn mutate(&self, solution: &Walker, _rng: &mut RandomNumberGenerator) -> Walker {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.threads.lock().unwrap().insert(thread::current().id());
            solution.clone()
        }
    }

    #[derive(Debug)]
    struct Exploding;

    impl Mutation<Walker> for Exploding {
        fn mutate(&self, _solution: &Walker, _rng: &mut RandomNumberGenerator) -> Walker {
            panic!("mutation failed");
        }
    }

    #[test]
    fn test_new_rejects_zero_workers() {
        let result = Annealing::<Walker, _, _>::new(
            RandomStep,
            Cauchy::new(1.0).unwrap(),
            AnnealingOptions::new(0, 10, 10),
        );
        assert!(matches!(result, Err(AnnealingError::Configuration(_))));
    }

    #[test]
    fn test_run_reaches_optimum() {
        let engine = Annealing::new(
            RandomStep,
            Cauchy::new(1.0).unwrap(),
            AnnealingOptions::new(4, 20, 10),
        )
        .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(11);

        let result = engine.run_with_rng(Walker { position: 15 }, &mut rng).unwrap();

        assert_eq!(result.criterion, 0.0);
        assert_eq!(result.solution.position, 0);
        assert_eq!(result.history.len(), result.generations);
        assert!(result.history.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_stalled_run_returns_seed() {
        let mutation = CountingStep::default();
        let engine =
            Annealing::new(mutation, Cauchy::new(1.0).unwrap(), AnnealingOptions::new(3, 5, 4))
                .unwrap();

        let result = engine.run(Walker { position: 8 }).unwrap();

        assert_eq!(result.criterion, 8.0);
        assert_eq!(result.generations, 4);
        // 4 generations x 3 workers x 5 idle steps
        assert_eq!(engine.mutation().calls.load(Ordering::SeqCst), 60);
        assert!(!engine.mutation().threads.lock().unwrap().contains(&thread::current().id()));
    }

    #[test]
    fn test_generation_cap() {
        let engine = Annealing::new(
            CountingStep::default(),
            Cauchy::new(1.0).unwrap(),
            AnnealingOptions::new_with_limit(2, 3, 100, 2),
        )
        .unwrap();

        let result = engine.run(Walker { position: 1 }).unwrap();

        assert_eq!(result.generations, 2);
        assert_eq!(result.history, vec![1.0, 1.0]);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let engine = Annealing::new(
            RandomStep,
            Cauchy::new(5.0).unwrap(),
            AnnealingOptions::new(3, 10, 5),
        )
        .unwrap();

        let first = engine
            .run_with_rng(Walker { position: 40 }, &mut RandomNumberGenerator::from_seed(3))
            .unwrap();
        let second = engine
            .run_with_rng(Walker { position: 40 }, &mut RandomNumberGenerator::from_seed(3))
            .unwrap();

        assert_eq!(first.history, second.history);
        assert_eq!(first.solution.position, second.solution.position);
    }

    #[test]
    #[should_panic(expected = "mutation failed")]
    fn test_strategy_panic_propagates() {
        let engine = Annealing::new(
            Exploding,
            Cauchy::new(1.0).unwrap(),
            AnnealingOptions::new(2, 10, 10),
        )
        .unwrap();

        let _ = engine.run(Walker { position: 1 });
    }
}
