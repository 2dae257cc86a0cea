use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use annealing::{
    annealing::{Annealing, AnnealingOptions},
    cooldown::BasicCooldown,
    rng::RandomNumberGenerator,
    scheduling::{InstanceGenerator, ReassignMutation},
};

fn bench_cooling_laws(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(42);
    let input = InstanceGenerator::new(4, 60, 1, 100)
        .unwrap()
        .generate(&mut rng);
    let seed = input.seed(&mut rng).unwrap();

    let mut group = c.benchmark_group("cooling_laws");
    group.sample_size(20);

    for cooldown in BasicCooldown::all(1000.0).unwrap() {
        let engine = Annealing::new(
            ReassignMutation,
            cooldown,
            AnnealingOptions::new(4, 10, 10),
        )
        .unwrap();

        group.bench_function(BenchmarkId::from_parameter(cooldown.name()), |b| {
            b.iter(|| {
                let mut rng = RandomNumberGenerator::from_seed(7);
                let result = engine
                    .run_with_rng(black_box(seed.clone()), &mut rng)
                    .unwrap();
                black_box(result.criterion)
            })
        });
    }
    group.finish();
}

fn bench_worker_count(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(43);
    let input = InstanceGenerator::new(8, 200, 1, 100)
        .unwrap()
        .generate(&mut rng);
    let seed = input.seed(&mut rng).unwrap();

    let mut group = c.benchmark_group("worker_count");
    group.sample_size(10);

    for workers in [1, 2, 4, 8] {
        let engine = Annealing::new(
            ReassignMutation,
            BasicCooldown::all(1000.0).unwrap()[1],
            AnnealingOptions::new(workers, 10, 10),
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, _| {
            b.iter(|| {
                let mut rng = RandomNumberGenerator::from_seed(7);
                black_box(engine.run_with_rng(seed.clone(), &mut rng).unwrap().criterion)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cooling_laws, bench_worker_count);
criterion_main!(benches);
