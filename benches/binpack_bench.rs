//! Criterion benchmarks for the bin packing GA.
//!
//! Measures fitness evaluation alone and full runs on random instances of
//! increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_binpack::ga::GaConfig;
use u_binpack::packing::{fitness, pack, random_chromosome, ProblemInstance};
use u_binpack::random::create_rng;

fn random_instance(n: usize, seed: u64) -> ProblemInstance {
    let mut rng = create_rng(seed);
    let sizes: Vec<u32> = (0..n).map(|_| rng.random_range(1..10)).collect();
    ProblemInstance::from_integers(&sizes, 10).expect("valid instance")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");

    for &n in &[14usize, 100, 1000] {
        let instance = random_instance(n, 42);
        let chromosome = random_chromosome(n, instance.max_bins(), &mut create_rng(7));
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(instance, chromosome),
            |b, (inst, chr)| b.iter(|| fitness::evaluate(black_box(chr), black_box(inst))),
        );
    }
    group.finish();
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    group.sample_size(10);

    for (n, pop, gen) in [(14usize, 100usize, 100usize), (50, 100, 50), (200, 100, 20)] {
        let instance = random_instance(n, 42);
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_log_interval(0)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(instance, config),
            |b, (inst, cfg)| {
                b.iter(|| {
                    let solution = pack(black_box(inst), black_box(cfg)).expect("valid config");
                    black_box(solution)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_pack);
criterion_main!(benches);
