use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack::{ExhaustiveSolver, Problem, SolverService};

/// Deterministic instance with roughly half of the total weight as capacity
fn instance(n: usize) -> Problem {
    let pairs: Vec<(u64, u64)> = (0..n as u64)
        .map(|i| ((i * 37 + 11) % 100 + 1, (i * 53 + 7) % 50 + 1))
        .collect();
    let capacity = pairs.iter().map(|&(_, w)| w).sum::<u64>() / 2;
    Problem::from_pairs(capacity, &pairs)
}

fn exhaustive_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive");
    group.sample_size(10);
    let solver = ExhaustiveSolver::new();
    for n in [8usize, 12, 16] {
        let problem = instance(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &problem, |b, problem| {
            b.iter(|| solver.solve(problem))
        });
    }
    group.finish();
}

criterion_group!(benches, exhaustive_growth);
criterion_main!(benches);
