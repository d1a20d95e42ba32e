//! # Partial View Benchmarks
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `increment` | O(references) |
//! | `get_oldest` | O(peers) |
//! | `get_least_frequent` | O(peers) |
//! | `add_neighbor` / `remove_neighbor` | O(log peers) |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use cyclon_partial_view::{FixedRandomSource, PartialView, PeerId, RngRandomSource};
use cyclon_tests::simulation::{Overlay, SimulationConfig};

/// A view of `peers` peers, peer `i` referenced `1 + i % 3` times at staggered ages.
fn populated_view(peers: usize) -> PartialView {
    let mut view = PartialView::new();
    for i in 0..peers {
        for _ in 0..(1 + i % 3) {
            view.add_neighbor(PeerId::new(format!("peer-{i:06}")));
        }
        if i % 16 == 0 {
            view.increment();
        }
    }
    view
}

fn bench_view_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("partial-view");
    group.measurement_time(Duration::from_secs(5));

    for size in [64usize, 1_024, 16_384] {
        let view = populated_view(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("get_oldest", size), &view, |b, view| {
            b.iter(|| black_box(view.get_oldest()))
        });

        let rng = RngRandomSource::seeded(1);
        group.bench_with_input(
            BenchmarkId::new("get_least_frequent", size),
            &view,
            |b, view| b.iter(|| black_box(view.get_least_frequent(&rng))),
        );

        group.bench_with_input(BenchmarkId::new("increment", size), &view, |b, view| {
            let mut view = view.clone();
            b.iter(|| view.increment())
        });

        group.bench_with_input(
            BenchmarkId::new("add_remove_round_trip", size),
            &view,
            |b, view| {
                let mut view = view.clone();
                let peer = PeerId::from("peer-000000");
                b.iter(|| {
                    view.add_neighbor(peer.clone());
                    black_box(view.remove_neighbor(&peer))
                })
            },
        );
    }

    let view = populated_view(1_024);
    let fixed = FixedRandomSource::first();
    group.bench_function("get_least_frequent_fixed_1024", |b| {
        b.iter(|| black_box(view.get_least_frequent(&fixed)))
    });

    group.finish();
}

fn bench_overlay_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("cyclon-overlay");
    group.measurement_time(Duration::from_secs(10));

    for nodes in [32usize, 256] {
        group.bench_with_input(BenchmarkId::new("round", nodes), &nodes, |b, &nodes| {
            let mut overlay = Overlay::ring(SimulationConfig {
                nodes,
                ..SimulationConfig::default()
            });
            b.iter(|| black_box(overlay.round()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_view_primitives, bench_overlay_round);
criterion_main!(benches);
