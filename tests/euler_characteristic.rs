//! Deterministic integration tests for Euler characteristic computation.
//!
//! Every mesh this crate produces is a triangulated disc, so `χ = 1` and
//! `F = 2V − 2 − b`. These tests check that for triangulations, refined
//! meshes and the generated circular and rectangular meshes.

use delaunay_mesh::prelude::*;
use delaunay_mesh::topology::characteristics::euler;

// =============================================================================
// DELAUNAY TRIANGULATIONS
// =============================================================================

#[test]
fn test_empty_mesh_euler() {
    let counts = euler::count_simplices(&Mesh2D::default());
    assert_eq!(counts, SimplexCounts::default());
    assert_eq!(euler::euler_characteristic(&counts), 0);
}

#[test]
fn test_single_triangle() {
    // V=3, E=3, F=1 → χ = 1
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.5, 1.0),
    ];
    let mesh = Delaunay::new(&points).unwrap().to_mesh();
    let report = euler::validate_planar_disc(&mesh).unwrap();

    assert_eq!(
        report.counts,
        SimplexCounts {
            vertices: 3,
            edges: 3,
            triangles: 1,
            boundary_edges: 3,
        }
    );
    assert_eq!(report.chi, 1);
}

#[test]
fn test_triangle_with_interior_vertex() {
    // V=4, E=6, F=3 → χ = 1
    let points = [
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(1.0, 0.5),
    ];
    let mesh = Delaunay::new(&points).unwrap().to_mesh();
    let report = euler::validate_planar_disc(&mesh).unwrap();

    assert_eq!(report.counts.edges, 6);
    assert_eq!(report.counts.triangles, 3);
    assert_eq!(report.counts.boundary_edges, 3);
}

#[test]
fn test_random_point_sets() {
    for seed in 0..20 {
        let points = generate_random_points_seeded(40, (-100.0, 100.0), seed).unwrap();
        let mesh = Delaunay::new(&points).unwrap().to_mesh();
        let report = euler::validate_planar_disc(&mesh)
            .unwrap_or_else(|e| panic!("seed {seed}: {e}"));
        assert_eq!(report.counts.vertices, 40);
    }
}

// =============================================================================
// REFINED AND GENERATED MESHES
// =============================================================================

#[test]
fn test_refined_polygon() {
    let mut graph = PlanarStraightLineGraph::new();
    graph
        .add_closed_line_segments(&regular_polygon(16, Point::origin(), 1.0))
        .unwrap();
    let mut refined = RefinedDelaunay::new(graph).unwrap();
    refined.refine(25.0).unwrap();

    let mesh = refined.to_mesh();
    let report = euler::validate_planar_disc(&mesh).unwrap();
    assert_eq!(report.chi, 1);
    // Boundary of a convex polygon is its (possibly split) segment list.
    assert_eq!(
        report.counts.boundary_edges,
        refined.graph().line_segments().len()
    );
}

#[test]
fn test_circular_mesh() {
    let mesh = circular_mesh(Point::new(0.5, 0.5), 0.5, 0.1).unwrap();
    let report = euler::validate_planar_disc(&mesh).unwrap();
    assert_eq!(report.counts.boundary_edges, 32);
    assert_eq!(
        report.counts.triangles,
        2 * report.counts.vertices - 2 - report.counts.boundary_edges
    );
}

#[test]
fn test_rectangular_meshes() {
    let rect = Rectangle::new(0.0, 3.0, -1.0, 1.0);
    for (nx, ny) in [(1, 1), (3, 2), (7, 5)] {
        let mesh = rectangular_mesh(&rect, nx, ny).unwrap();
        let report = euler::validate_planar_disc(&mesh).unwrap();
        assert_eq!(report.counts.vertices, (nx + 1) * (ny + 1));
        assert_eq!(report.counts.triangles, 2 * nx * ny);
        assert_eq!(report.counts.boundary_edges, 2 * (nx + ny));
        // Interior edges: horizontal, vertical and one diagonal per cell.
        assert_eq!(
            report.counts.edges,
            nx * (ny + 1) + ny * (nx + 1) + nx * ny
        );
    }
}

#[test]
fn test_broken_mesh_is_rejected() {
    let mut mesh = rectangular_mesh(&Rectangle::new(0.0, 1.0, 0.0, 1.0), 2, 2).unwrap();
    mesh.interior.pop();
    assert!(matches!(
        euler::validate_planar_disc(&mesh),
        Err(TopologyError::BoundaryMismatch { .. })
    ));
}
