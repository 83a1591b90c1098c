//! Criterion benchmarks for the loadout optimizer.
//!
//! Uses synthetic inventories of varying size to measure the cost of the
//! search stages independently of any host.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_loadout::exhaustive::ExhaustiveSearch;
use u_loadout::filter::prefilter;
use u_loadout::model::Module;
use u_loadout::optimizer::{OptimizerConfig, OptimizerRunner};
use u_loadout::scoring::PriorityWeights;

const EFFECTS: [&str; 12] = [
    "Strength Boost",
    "Agility Boost",
    "Intellect Boost",
    "Special Attack",
    "Elite Strike",
    "Healing Boost",
    "Resistance",
    "Armor",
    "Cast Focus",
    "Attack SPD",
    "Crit Focus",
    "Luck Focus",
];

const PRIORITY: [&str; 3] = ["Crit Focus", "Agility Boost", "Luck Focus"];

// ===========================================================================
// Synthetic inventory
// ===========================================================================

fn inventory(n: usize) -> Vec<Module> {
    (0..n)
        .map(|i| {
            let mut m = Module::new(format!("Module {}", i + 1))
                .with_effect(0, EFFECTS[i % 12], (i * 7 % 10) as u32 + 1)
                .with_effect(1, EFFECTS[(i * 5 + 3) % 12], (i * 3 % 10) as u32 + 1);
            if i % 3 == 0 {
                m = m.with_effect(2, EFFECTS[(i + 7) % 12], (i % 5) as u32 + 1);
            }
            m
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_scoring(c: &mut Criterion) {
    let modules = inventory(4);
    let weights = PriorityWeights::new(&PRIORITY);
    c.bench_function("score_4_modules", |b| {
        b.iter(|| weights.score(black_box(&modules)))
    });
}

fn bench_prefilter(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefilter");
    for &n in &[200usize, 1000] {
        let modules = inventory(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &modules, |b, modules| {
            b.iter(|| prefilter(black_box(modules.clone()), 100, 30))
        });
    }
    group.finish();
}

fn bench_optimizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimizer");
    group.sample_size(20);
    for &n in &[30usize, 100, 500] {
        let modules = inventory(n);
        let config = OptimizerConfig::default().with_seed(42);
        group.bench_with_input(BenchmarkId::new("slots_4", n), &modules, |b, modules| {
            b.iter(|| OptimizerRunner::run(black_box(modules), 4, &PRIORITY, &config))
        });
    }
    group.finish();
}

fn bench_exhaustive(c: &mut Criterion) {
    let modules = inventory(30);
    let search = ExhaustiveSearch::default();
    c.bench_function("exhaustive_30_choose_3", |b| {
        b.iter(|| search.run(black_box(&modules), 3, &PRIORITY))
    });
}

criterion_group!(
    benches,
    bench_scoring,
    bench_prefilter,
    bench_optimizer,
    bench_exhaustive
);
criterion_main!(benches);
