//! Euler characteristic of exported meshes.
//!
//! A triangulation of a point set covers its convex hull, a topological
//! disc, so `χ = V − E + F = 1`. Combined with `3F + b = 2E` (every interior
//! edge borders two triangles, every boundary edge one) this gives the
//! triangle count `F = 2V − 2 − b` for `b` boundary edges.
//!
//! # Examples
//!
//! ```rust
//! use delaunay_mesh::core::delaunay_triangulation::Delaunay;
//! use delaunay_mesh::geometry::point::Point;
//! use delaunay_mesh::topology::characteristics::euler;
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.5, 1.0),
//!     Point::new(0.5, 0.3),
//! ];
//! let mesh = Delaunay::new(&points).unwrap().to_mesh();
//!
//! let counts = euler::count_simplices(&mesh);
//! assert_eq!(euler::euler_characteristic(&counts), 1);
//! assert!(euler::validate_planar_disc(&mesh).is_ok());
//! ```

use crate::core::mesh::Mesh2D;
use crate::core::simplex::LineElement;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Numbers of vertices, edges and triangles (the f-vector `f₀, f₁, f₂`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimplexCounts {
    /// `f₀`
    pub vertices: usize,
    /// `f₁`, undirected
    pub edges: usize,
    /// `f₂`
    pub triangles: usize,
    /// Edges bordering exactly one triangle
    pub boundary_edges: usize,
}

/// Topological inconsistencies found by [`validate_planar_disc`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    /// `V − E + F` is not 1.
    #[error("Euler characteristic is {chi}, expected 1 for a triangulated disc")]
    EulerMismatch {
        /// Computed characteristic
        chi: i64,
    },
    /// The triangle count disagrees with `2V − 2 − b`.
    #[error("Mesh has {triangles} triangles, expected {expected} from 2V - 2 - b")]
    TriangleCountMismatch {
        /// Actual count
        triangles: usize,
        /// `2V − 2 − b`
        expected: i64,
    },
    /// The reported boundary disagrees with the edges used by a single triangle.
    #[error("Mesh reports {reported} boundary edges but {found} edges border a single triangle")]
    BoundaryMismatch {
        /// Length of `Mesh2D::boundary`
        reported: usize,
        /// Edges used exactly once
        found: usize,
    },
    /// An edge borders more than two triangles.
    #[error("Edge {edge:?} borders {count} triangles")]
    NonManifoldEdge {
        /// The offending edge, smaller index first
        edge: LineElement,
        /// Number of triangles using it
        count: usize,
    },
}

/// Summary of a successful [`validate_planar_disc`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EulerReport {
    /// Simplex counts
    pub counts: SimplexCounts,
    /// `V − E + F`
    pub chi: i64,
}

fn edge_usage(mesh: &Mesh2D) -> FxHashMap<LineElement, usize> {
    let mut usage = FxHashMap::default();
    for edge in mesh.all_edges() {
        *usage.entry(edge.canonical()).or_insert(0) += 1;
    }
    usage
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Counts the simplices of `mesh`.
///
/// Every entry of `vertices` counts, whether or not a triangle uses it.
#[must_use]
pub fn count_simplices(mesh: &Mesh2D) -> SimplexCounts {
    let usage = edge_usage(mesh);
    SimplexCounts {
        vertices: mesh.vertices.len(),
        edges: usage.len(),
        triangles: mesh.interior.len(),
        boundary_edges: usage.values().filter(|&&count| count == 1).count(),
    }
}

/// `χ = V − E + F`.
#[must_use]
pub fn euler_characteristic(counts: &SimplexCounts) -> i64 {
    to_i64(counts.vertices) - to_i64(counts.edges) + to_i64(counts.triangles)
}

/// Checks that `mesh` is a triangulated disc using every vertex.
///
/// # Errors
///
/// Returns the first failed check: manifold edges, boundary consistency,
/// `χ = 1`, then `F = 2V − 2 − b`.
pub fn validate_planar_disc(mesh: &Mesh2D) -> Result<EulerReport, TopologyError> {
    if let Some((&edge, &count)) = edge_usage(mesh).iter().find(|&(_, &count)| count > 2) {
        return Err(TopologyError::NonManifoldEdge { edge, count });
    }

    let counts = count_simplices(mesh);
    if counts.boundary_edges != mesh.boundary.len() {
        return Err(TopologyError::BoundaryMismatch {
            reported: mesh.boundary.len(),
            found: counts.boundary_edges,
        });
    }

    let chi = euler_characteristic(&counts);
    if chi != 1 {
        return Err(TopologyError::EulerMismatch { chi });
    }

    let expected = 2 * to_i64(counts.vertices) - 2 - to_i64(counts.boundary_edges);
    if to_i64(counts.triangles) != expected {
        return Err(TopologyError::TriangleCountMismatch {
            triangles: counts.triangles,
            expected,
        });
    }
    Ok(EulerReport { counts, chi })
}
