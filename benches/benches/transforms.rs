// Copyright 2025 the dxfview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `dxfview_transform`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dxfview_transform::{CoordinateTransforms, Point2D, ViewTransform, Viewport, Zoom};
use kurbo::Rect;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 11) as f64) / ((1_u64 << 53) as f64)
    }

    fn gen_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn world_points(n: usize, seed: u64) -> Vec<Point2D> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            Point2D::new(
                rng.gen_range(-50_000.0, 50_000.0),
                rng.gen_range(-50_000.0, 50_000.0),
            )
        })
        .collect()
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("dxfview_transform");
    let xf = CoordinateTransforms::default();
    let vp = Viewport::new(1920, 1080);

    for &scale in &[1e-3_f64, 1.0, 1e3] {
        let tf = ViewTransform::new(scale, 250.0, -125.0);
        let points = world_points(1_024, 0xD8F0_0000_0000_0001);

        group.bench_with_input(
            BenchmarkId::new("world_to_screen", scale),
            &points,
            |b, points| {
                b.iter(|| {
                    for &p in points {
                        black_box(xf.world_to_screen(black_box(p), &tf, &vp).ok());
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("roundtrip", scale),
            &points,
            |b, points| {
                b.iter(|| {
                    for &p in points {
                        let s = xf.world_to_screen(black_box(p), &tf, &vp);
                        black_box(s.and_then(|s| xf.screen_to_world(s, &tf, &vp)).ok());
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("affine_batch", scale),
            &points,
            |b, points| {
                b.iter(|| {
                    if let Ok(affine) = xf.world_to_screen_affine(&tf, &vp) {
                        for &p in points {
                            black_box(affine * black_box(p));
                        }
                    }
                });
            },
        );
    }

    let zoom = Zoom::default();
    group.bench_function("fit_to_bounds", |b| {
        let bounds = Rect::new(-12_000.0, -3_000.0, 48_000.0, 21_000.0);
        b.iter(|| black_box(zoom.fit_to_bounds(black_box(bounds), &vp, 20.0).ok()));
    });

    group.finish();
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
