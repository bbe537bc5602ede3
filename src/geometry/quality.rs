//! Shape quality measures for triangles and exported meshes.
//!
//! Refinement judges triangles by their smallest angle. The measures here
//! give the related views used when inspecting a finished mesh:
//!
//! - **Radius-edge ratio**: circumradius divided by the shortest edge. For
//!   any triangle it equals `1 / (2 sin θ_min)`, so bounding it from above is
//!   the same as bounding the smallest angle from below.
//! - **Radius ratio**: circumradius divided by inradius. An equilateral
//!   triangle attains the optimum `2`.
//!
//! # References
//!
//! - Ruppert, J. "A Delaunay Refinement Algorithm for Quality 2-Dimensional
//!   Mesh Generation" *Journal of Algorithms* 18.3 (1995): 548-585
//! - Shewchuk, J.R. "What Is a Good Linear Element? Interpolation, Conditioning,
//!   Anisotropy, and Quality Measures" (2002)

use crate::core::mesh::Mesh2D;
use crate::geometry::triangle::Triangle;
use std::{error::Error, fmt};

/// Errors that can occur during quality metric computation.
#[derive(Debug, Clone, PartialEq)]
pub enum QualityError {
    /// Triangle is degenerate (zero area or a zero-length side)
    DegenerateTriangle {
        /// Area of the offending triangle
        area: f64,
    },
}

impl fmt::Display for QualityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateTriangle { area } => {
                write!(f, "Degenerate triangle with area ≈ {area}")
            }
        }
    }
}

impl Error for QualityError {}

fn ensure_non_degenerate(triangle: &Triangle) -> Result<f64, QualityError> {
    let area = triangle.area();
    if area > 0.0 && area.is_finite() && triangle.shortest_edge() > 0.0 {
        Ok(area)
    } else {
        Err(QualityError::DegenerateTriangle { area })
    }
}

/// Circumradius divided by the shortest edge length.
///
/// # Errors
///
/// Returns [`QualityError::DegenerateTriangle`] for collinear or coincident corners.
///
/// # Examples
///
/// ```rust
/// use delaunay_mesh::geometry::point::Point;
/// use delaunay_mesh::geometry::quality::radius_edge_ratio;
/// use delaunay_mesh::geometry::triangle::Triangle;
///
/// let h = 3.0_f64.sqrt() / 2.0;
/// let t = Triangle::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.5, h));
/// let ratio = radius_edge_ratio(&t).unwrap();
/// assert!((ratio - 1.0 / 3.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn radius_edge_ratio(triangle: &Triangle) -> Result<f64, QualityError> {
    ensure_non_degenerate(triangle)?;
    Ok(triangle.circumradius() / triangle.shortest_edge())
}

/// Circumradius divided by inradius.
///
/// # Errors
///
/// Returns [`QualityError::DegenerateTriangle`] for collinear or coincident corners.
pub fn radius_ratio(triangle: &Triangle) -> Result<f64, QualityError> {
    let area = ensure_non_degenerate(triangle)?;
    let [a, b, c] = triangle.vertices();
    let semi_perimeter = 0.5 * (a.distance(b) + b.distance(c) + c.distance(a));
    let inradius = area / semi_perimeter;
    Ok(triangle.circumradius() / inradius)
}

/// Smallest and largest interior angle, in radians, over all interior triangles.
///
/// Returns `None` for a mesh without triangles.
#[must_use]
pub fn mesh_angle_extrema(mesh: &Mesh2D) -> Option<(f64, f64)> {
    mesh.triangles().fold(None, |acc, triangle| {
        let [x, y, z] = triangle.angles();
        let lo = x.min(y).min(z);
        let hi = x.max(y).max(z);
        Some(match acc {
            None => (lo, hi),
            Some((min, max)) => (lo.min(min), hi.max(max)),
        })
    })
}

/// Smallest interior angle in degrees over all interior triangles.
#[must_use]
pub fn mesh_smallest_angle_degrees(mesh: &Mesh2D) -> Option<f64> {
    mesh_angle_extrema(mesh).map(|(min, _)| min.to_degrees())
}
