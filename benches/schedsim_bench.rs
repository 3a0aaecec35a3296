//! Criterion benchmarks for the scheduling simulation.
//!
//! Uses seeded synthetic workloads so runs are comparable across builds.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_schedsim::engine::{SimConfig, Simulator};
use u_schedsim::sweep::{run_sweep, SweepConfig};
use u_schedsim::workload::{generate, WorkloadConfig};

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    group.sample_size(20);

    for (count, quantum) in [(10usize, 2u64), (100, 4), (1000, 4)] {
        let table = generate(
            &WorkloadConfig::new(count)
                .with_max_arrival(count as u64 * 2)
                .with_burst_range(1, 20)
                .with_seed(42),
        )
        .unwrap();
        let config = SimConfig::new(quantum);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_q{}", count, quantum), count),
            &(table, config),
            |b, (t, c)| {
                b.iter(|| {
                    let result = Simulator::run(black_box(t.clone()), black_box(c)).unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantum_sweep");
    group.sample_size(10);

    let table = generate(&WorkloadConfig::new(200).with_max_arrival(400).with_seed(7)).unwrap();
    for &parallel in &[false, true] {
        let config = SweepConfig::up_to(16).unwrap().with_parallel(parallel);
        group.bench_with_input(
            BenchmarkId::from_parameter(if parallel { "parallel" } else { "sequential" }),
            &config,
            |b, c| {
                b.iter(|| {
                    let result = run_sweep(black_box(&table), black_box(c)).unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_simulate, bench_sweep);
criterion_main!(benches);
