//! Benchmarks for the minimum-volume sphere construction.
//!
//! Run with: cargo bench -p geom-bounding
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p geom-bounding -- --save-baseline main
//! 2. After changes: cargo bench -p geom-bounding -- --baseline main

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use geom_bounding::{MinSphereParams, minimum_volume_sphere};
use nalgebra::Point3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Points drawn uniformly from a cube. Most points end up interior,
/// so this exercises the fast containment-skip path.
fn cube_points(count: usize) -> Vec<Point3<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            Point3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            )
        })
        .collect()
}

/// Points on the unit sphere. Every point is a potential support
/// point, which stresses the update machinery.
fn shell_points(count: usize) -> Vec<Point3<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    (0..count)
        .map(|_| loop {
            let v = nalgebra::Vector3::new(
                rng.gen_range(-1.0..1.0f64),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let norm = v.norm();
            if norm > 1e-3 {
                break Point3::from(v / norm);
            }
        })
        .collect()
}

fn bench_min_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("MinimumVolumeSphere");
    let params = MinSphereParams::default();

    for count in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));

        let cube = cube_points(count);
        group.bench_with_input(BenchmarkId::new("cube", count), &cube, |b, points| {
            b.iter(|| minimum_volume_sphere(black_box(points), &params));
        });

        let shell = shell_points(count);
        group.bench_with_input(BenchmarkId::new("shell", count), &shell, |b, points| {
            b.iter(|| minimum_volume_sphere(black_box(points), &params));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_min_sphere);
criterion_main!(benches);
