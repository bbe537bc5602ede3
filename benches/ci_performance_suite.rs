//! CI Performance Suite - performance regression testing for CI/CD
//!
//! Covers the code paths that dominate mesh generation time:
//!
//! 1. Incremental triangulation of seeded random point sets
//! 2. The in-circle predicate used by edge legalization
//! 3. Quality refinement of polygonal boundaries
//! 4. Circular mesh generation end to end
//!
//! Inputs are generated outside the measured closures from fixed seeds so
//! runs are comparable.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use delaunay_mesh::core::delaunay_triangulation::Delaunay;
use delaunay_mesh::core::pslg::PlanarStraightLineGraph;
use delaunay_mesh::core::refined_delaunay::RefinedDelaunay;
use delaunay_mesh::geometry::point::Point;
use delaunay_mesh::geometry::predicates::in_circle_determinant;
use delaunay_mesh::geometry::util::{
    circular_mesh, generate_random_points_seeded, regular_polygon,
};
use std::hint::black_box;

/// Point counts for triangulation benchmarks
const COUNTS: &[usize] = &[50, 200, 1000];

/// Fixed seed for deterministic point sets
const SEED: u64 = 0x5EED;

fn bench_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("delaunay_new");
    for &count in COUNTS {
        let points = generate_random_points_seeded(count, (-100.0, 100.0), SEED + count as u64)
            .expect("valid range");
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("random", count), &points, |b, points| {
            b.iter(|| {
                let dt = Delaunay::new(black_box(points)).expect("triangulation failed");
                black_box(dt.number_of_triangles())
            });
        });
    }
    group.finish();
}

fn bench_in_circle(c: &mut Criterion) {
    let points = generate_random_points_seeded(4_000, (-1.0, 1.0), SEED).expect("valid range");
    c.bench_function("in_circle_determinant/1000", |b| {
        b.iter(|| {
            points
                .chunks_exact(4)
                .map(|q| in_circle_determinant(q[0], q[1], q[2], q[3]))
                .filter(|&det| det > 0.0)
                .count()
        });
    });
}

fn bench_refinement(c: &mut Criterion) {
    let mut group = c.benchmark_group("refine_polygon");
    group.sample_size(20);
    for &n in &[12_usize, 24, 36] {
        let boundary = regular_polygon(n, Point::origin(), 1.0);
        group.bench_with_input(BenchmarkId::new("25deg", n), &boundary, |b, boundary| {
            b.iter(|| {
                let mut graph = PlanarStraightLineGraph::new();
                graph
                    .add_closed_line_segments(boundary)
                    .expect("polygon has enough vertices");
                let mut refined = RefinedDelaunay::new(graph).expect("graph triangulates");
                refined.refine(black_box(25.0)).expect("refinement failed")
            });
        });
    }
    group.finish();
}

fn bench_circular_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("circular_mesh");
    group.sample_size(10);
    for &max_h in &[0.25, 0.1, 0.05] {
        group.bench_with_input(BenchmarkId::new("unit", max_h), &max_h, |b, &max_h| {
            b.iter(|| circular_mesh(Point::origin(), 1.0, black_box(max_h)).expect("mesh failed"));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_triangulation,
    bench_in_circle,
    bench_refinement,
    bench_circular_mesh
);
criterion_main!(benches);
