use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use graph_recurrence::prelude::*;

/// Complete graph with the first `removed` pairs (in key order) absent.
fn thinned(n: usize, removed: usize) -> EdgeMatrix {
    let mut m = EdgeMatrix::complete(n);
    for (i, j) in TriangularIndex::pairs(n).take(removed) {
        m.remove_edge(i, j).expect("pair in range");
    }
    m
}

/// Same edge count as `thinned(n, 1)` but a different missing pair.
fn shifted(n: usize, pair: usize) -> EdgeMatrix {
    let mut m = EdgeMatrix::complete(n);
    if let Some((i, j)) = TriangularIndex::pairs(n).nth(pair) {
        m.remove_edge(i, j).expect("pair in range");
    }
    m
}

fn bench_cycle_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_detection");
    let iterations = 50;

    for &n in &[50usize, 200] {
        // every iteration has a distinct edge count: the filter rejects all
        let distinct: Vec<EdgeMatrix> = (0..iterations).map(|k| thinned(n, k)).collect();
        // every iteration shares one edge count: each save compares in full
        let same_count: Vec<EdgeMatrix> = (0..iterations).map(|k| shifted(n, k)).collect();

        for (name, states) in [("distinct_counts", &distinct), ("same_count", &same_count)] {
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, &n| {
                b.iter(|| {
                    let mut tracker = CycleTracker::new(n);
                    let mut previous = &states[0];
                    for state in states {
                        tracker
                            .save(state, previous, state.present_edges())
                            .expect("save");
                        black_box(tracker.has_cycle());
                        previous = state;
                    }
                    black_box(tracker.stats().full_comparisons)
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_cycle_detection);
criterion_main!(benches);
