//! Benchmark: per-frame drag cost (hit test, move proposal, bounds gate)
//! at various image counts (10, 100, 1000).
//!
//! Every pointer-move clones the layout and re-checks every placement, so
//! this is the hot path while a drag is in progress.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pinboard_core::{Rect, Size, Vec2};
use pinboard_layout::BoardLayout;

const SURFACE: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1600.0,
    height: 900.0,
};

/// Generate `n` small images with slightly varying sizes.
fn generate_sizes(n: usize) -> Vec<Size> {
    (0..n)
        .map(|i| Size::new(20.0 + (i % 7) as f32, 15.0 + (i % 5) as f32))
        .collect()
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_frame");
    for &n in &[10, 100, 1000] {
        let layout = BoardLayout::from_image_sizes(&generate_sizes(n)).unwrap();
        let press = Vec2::new(10.0, 10.0);
        let drag = layout.hit_test(press);

        group.bench_with_input(BenchmarkId::new("hit_test", n), &n, |b, _| {
            b.iter(|| black_box(layout.hit_test(press)));
        });

        group.bench_with_input(BenchmarkId::new("propose_and_gate", n), &n, |b, _| {
            b.iter(|| {
                let candidate = layout.propose_move(&drag, Vec2::new(3.0, 2.0));
                black_box(candidate.within_bounds(SURFACE))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
