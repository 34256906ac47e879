//! Rank estimator benchmarks
//!
//! Measures performance of:
//! - Transition model construction
//! - Sampling estimator at several sample counts
//! - Iterative estimator on growing graphs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linkrank_core::{sample_pagerank, transition_model, IterativeRank, LinkGraph};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Ring graph where every page also links a few pages ahead; every tenth page is a sink
fn build_graph(pages: usize) -> LinkGraph {
    LinkGraph::from_links((0..pages).map(|i| {
        let targets: Vec<String> = if i % 10 == 0 {
            Vec::new()
        } else {
            [1, 3, 7]
                .iter()
                .map(|step| format!("page{:05}.html", (i + step) % pages))
                .collect()
        };
        (format!("page{:05}.html", i), targets)
    }))
}

fn bench_transition_model(c: &mut Criterion) {
    let graph = build_graph(500);

    c.bench_function("transition_model_500", |b| {
        b.iter(|| transition_model(black_box(&graph), black_box("page00001.html"), 0.85))
    });
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_pagerank");
    let graph = build_graph(100);

    for samples in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &samples| {
            b.iter(|| {
                let mut rng = ChaCha20Rng::seed_from_u64(42);
                sample_pagerank(black_box(&graph), 0.85, samples, &mut rng)
            })
        });
    }

    group.finish();
}

fn bench_iterative(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_pagerank");
    let engine = IterativeRank::new();

    for pages in [10, 100, 1_000] {
        let graph = build_graph(pages);
        group.bench_with_input(BenchmarkId::from_parameter(pages), &graph, |b, graph| {
            b.iter(|| engine.run(black_box(graph)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transition_model, bench_sampling, bench_iterative);
criterion_main!(benches);
