//! Ready-made meshes of simple domains.
//!
//! [`circular_mesh`] runs quality refinement on a polygonal approximation of
//! a circle; [`rectangular_mesh`] builds a structured grid directly, without
//! going through the Delaunay engine.

use crate::core::mesh::Mesh2D;
use crate::core::pslg::{PlanarStraightLineGraph, PslgError};
use crate::core::refined_delaunay::{RefinedDelaunay, RefinementError};
use crate::core::simplex::{LineElement, TriangleElement};
use crate::geometry::point::Point;
use crate::geometry::rectangle::Rectangle;
use crate::geometry::util::point_generation::regular_polygon;
use std::f64::consts::PI;
use thiserror::Error;
use tracing::debug;

/// Minimum angle, in degrees, that [`circular_mesh`] refines to.
pub const CIRCULAR_MESH_MIN_ANGLE: f64 = 25.0;

/// Offset of the four interior seed points around the center.
pub const CIRCULAR_MESH_SEED_OFFSET: f64 = 0.1;

/// Errors from the mesh generators.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MeshGenerationError {
    /// Radius or target edge length is not a positive finite number.
    #[error("Radius {radius} and edge length {max_h} must be positive and finite")]
    InvalidCircle {
        /// Requested radius
        radius: f64,
        /// Requested boundary edge length
        max_h: f64,
    },
    /// The boundary would need more points than can be counted.
    #[error("Edge length {max_h} is too small for radius {radius}")]
    TooManyBoundaryPoints {
        /// Requested radius
        radius: f64,
        /// Requested boundary edge length
        max_h: f64,
    },
    /// A grid direction has no cells.
    #[error("Grid needs at least one division per axis, got {nx} x {ny}")]
    ZeroDivisions {
        /// Divisions along x
        nx: usize,
        /// Divisions along y
        ny: usize,
    },
    /// Building the boundary graph failed.
    #[error("Graph error: {0}")]
    Graph(#[from] PslgError),
    /// Refinement failed.
    #[error("Refinement error: {0}")]
    Refinement(#[from] RefinementError),
}

/// Number of boundary points so that consecutive points are at most about
/// `max_h` apart on a circle of `radius`.
fn boundary_point_count(radius: f64, max_h: f64) -> Result<usize, MeshGenerationError> {
    let half_angle = (0.5 * max_h / radius).min(1.0).asin();
    num_traits::cast::<f64, usize>((PI / half_angle).ceil())
        .map(|n| n.max(3))
        .ok_or(MeshGenerationError::TooManyBoundaryPoints { radius, max_h })
}

/// Quality mesh of the disc of `radius` around `center`.
///
/// The boundary is a closed polygon of `n = max(3, ⌈π / asin(max_h / 2r)⌉)`
/// points. The center and four points offset by
/// [`CIRCULAR_MESH_SEED_OFFSET`] along the axes are inserted before
/// refining to [`CIRCULAR_MESH_MIN_ANGLE`] degrees.
///
/// # Errors
///
/// Returns [`MeshGenerationError::InvalidCircle`] for a non-positive or
/// non-finite `radius` or `max_h`, and [`MeshGenerationError::Refinement`]
/// if refinement fails.
///
/// # Examples
///
/// ```rust
/// use delaunay_mesh::geometry::point::Point;
/// use delaunay_mesh::geometry::util::circular_mesh;
///
/// let mesh = circular_mesh(Point::origin(), 1.0, 0.25).unwrap();
/// assert_eq!(mesh.number_of_boundary_edges(), 26);
/// ```
pub fn circular_mesh(
    center: Point,
    radius: f64,
    max_h: f64,
) -> Result<Mesh2D, MeshGenerationError> {
    let valid = |value: f64| value.is_finite() && value > 0.0;
    if !(valid(radius) && valid(max_h)) {
        return Err(MeshGenerationError::InvalidCircle { radius, max_h });
    }

    let n = boundary_point_count(radius, max_h)?;
    let boundary = regular_polygon(n, center, radius);

    let mut graph = PlanarStraightLineGraph::new();
    graph.add_closed_line_segments(&boundary)?;
    let mut refined = RefinedDelaunay::new(graph)?;

    let d = CIRCULAR_MESH_SEED_OFFSET;
    for offset in [(0.0, 0.0), (d, 0.0), (0.0, d), (-d, 0.0), (0.0, -d)] {
        refined
            .insert(Point::new(center.x + offset.0, center.y + offset.1))
            .map_err(RefinementError::from)?;
    }
    let stats = refined.refine(CIRCULAR_MESH_MIN_ANGLE)?;

    let mesh = refined.to_mesh();
    debug!(
        boundary_points = n,
        iterations = stats.iterations,
        vertices = mesh.number_of_vertices(),
        triangles = mesh.number_of_triangles(),
        "generated circular mesh"
    );
    Ok(mesh)
}

/// Structured triangle mesh of `rect` with `nx × ny` cells.
///
/// Vertices are laid out row by row from the bottom-left corner, so vertex
/// `i + (nx + 1)·j` sits at `(left + i·dx, bottom + j·dy)`. Each cell is
/// split along its rising diagonal into two counterclockwise triangles.
/// The boundary lists the bottom and top rows first, then the left and
/// right columns.
///
/// # Errors
///
/// Returns [`MeshGenerationError::ZeroDivisions`] if `nx` or `ny` is zero.
///
/// # Examples
///
/// ```rust
/// use delaunay_mesh::geometry::rectangle::Rectangle;
/// use delaunay_mesh::geometry::util::rectangular_mesh;
///
/// let mesh = rectangular_mesh(&Rectangle::new(0.0, 2.0, 0.0, 1.0), 2, 1).unwrap();
/// assert_eq!(mesh.number_of_vertices(), 6);
/// assert_eq!(mesh.number_of_triangles(), 4);
/// assert_eq!(mesh.number_of_boundary_edges(), 6);
/// ```
#[expect(
    clippy::cast_precision_loss,
    reason = "grid divisions are far below 2^52"
)]
pub fn rectangular_mesh(
    rect: &Rectangle,
    nx: usize,
    ny: usize,
) -> Result<Mesh2D, MeshGenerationError> {
    if nx == 0 || ny == 0 {
        return Err(MeshGenerationError::ZeroDivisions { nx, ny });
    }
    let dx = rect.width() / nx as f64;
    let dy = rect.height() / ny as f64;
    let row = nx + 1;

    let vertices = (0..=ny)
        .flat_map(|j| {
            (0..=nx).map(move |i| {
                Point::new(rect.left + dx * i as f64, rect.bottom + dy * j as f64)
            })
        })
        .collect();

    let mut interior = Vec::with_capacity(2 * nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            let c0 = i + row * j;
            let c1 = c0 + 1;
            let c2 = i + 1 + row * (j + 1);
            let c3 = i + row * (j + 1);
            interior.push(TriangleElement::new(c0, c1, c2));
            interior.push(TriangleElement::new(c0, c2, c3));
        }
    }

    let mut boundary = Vec::with_capacity(2 * (nx + ny));
    for i in 0..nx {
        boundary.push(LineElement::new(i, i + 1));
        boundary.push(LineElement::new(i + row * ny, i + 1 + row * ny));
    }
    for j in 0..ny {
        boundary.push(LineElement::new(row * j, row * (j + 1)));
        boundary.push(LineElement::new(row * j + nx, row * (j + 1) + nx));
    }

    Ok(Mesh2D {
        vertices,
        interior,
        boundary,
    })
}
