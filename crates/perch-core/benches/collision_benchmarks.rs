//! Collision resolver benchmark.
//!
//! The resolver runs once per 30 ms tick against however many windows the
//! desktop currently shows, so it must stay far below the tick budget even
//! for absurd window counts.
//!
//! Run with: `cargo bench --bench collision_benchmarks -p perch-core`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use perch_core::prelude::*;

/// A tiled grid of plausible window rectangles.
fn window_grid(count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let col = (i % 16) as f64;
            let row = (i / 16) as f64;
            let left = col * 120.0;
            let top = 60.0 + row * 90.0;
            Rect::new(left, top, left + 640.0, top + 480.0)
        })
        .collect()
}

fn bench_landing_platform(c: &mut Criterion) {
    let config = SimConfig::default();
    let mut agent = AgentState::new(400.0, 0.0, 128.0);
    // Park the bottom edge inside the band of a mid-grid row.
    agent.y = 510.0 - agent.height;

    let mut group = c.benchmark_group("landing_platform");
    for count in [8usize, 64, 512] {
        let terrain = window_grid(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &terrain, |b, terrain| {
            b.iter(|| landing_platform(black_box(&agent), black_box(terrain), &config));
        });
    }
    group.finish();
}

fn bench_full_resolve(c: &mut Criterion) {
    let config = SimConfig::default();
    let terrain = window_grid(64);

    c.bench_function("resolve_collision_64_windows", |b| {
        b.iter(|| {
            let mut agent = AgentState::new(400.0, 382.0, 128.0);
            resolve_collision(black_box(&mut agent), black_box(&terrain), &config)
        });
    });
}

criterion_group!(benches, bench_landing_platform, bench_full_resolve);
criterion_main!(benches);
