//! Criterion benches for the dead-end scan on a prebuilt ball.
//!
//! The ball to `R + depth_cap` is built once in setup; only the sphere scan
//! and escape searches are timed.

use cayley::api::{
    analyze_dead_ends, build_default_ball, BallCfg, Cyclic, DeadEndCfg, IntegerLine, Wreath,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_scan(c: &mut Criterion) {
    let w = Wreath::new(Cyclic::new(2).unwrap(), IntegerLine);
    let mut group = c.benchmark_group("dead_end_scan");
    group.sample_size(10);
    for (radius, cap) in [(6usize, 4usize), (7, 6)] {
        let cfg = DeadEndCfg::new(radius, cap);
        let ball = build_default_ball(&w, BallCfg::new(cfg.ball_radius())).unwrap();
        group.bench_with_input(
            BenchmarkId::new("lamplighter", format!("R{radius}_cap{cap}")),
            &cfg,
            |b, cfg| b.iter(|| analyze_dead_ends(&w, &ball, *cfg).unwrap().count()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
