//! Validation helpers for exported meshes.
//!
//! These checks are global and quadratic; they are meant for tests and
//! diagnostics, not for use inside the construction loop.

use crate::core::mesh::Mesh2D;
use crate::core::simplex::TriangleElement;
use crate::geometry::point::Point;
use crate::geometry::triangle::Triangle;
use thiserror::Error;

/// Relative slack applied to circumradii by [`validate_delaunay`].
pub const DELAUNAY_RELATIVE_TOLERANCE: f64 = 1e-9;

/// Errors that can occur during Delaunay property validation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DelaunayValidationError {
    /// A vertex lies strictly inside a triangle's circumcircle.
    #[error("Triangle {triangle} has vertex {vertex} strictly inside its circumcircle")]
    DelaunayViolation {
        /// Position of the triangle in `interior`
        triangle: usize,
        /// Index of the offending vertex
        vertex: usize,
    },
    /// A triangle refers to a vertex the mesh does not have.
    #[error("Triangle {triangle} refers to vertex {vertex}, but the mesh has {vertex_count} vertices")]
    InvalidVertexIndex {
        /// Position of the triangle in `interior`
        triangle: usize,
        /// The out-of-range index
        vertex: usize,
        /// Number of vertices in the mesh
        vertex_count: usize,
    },
}

fn checked_triangle(
    mesh: &Mesh2D,
    position: usize,
    element: TriangleElement,
) -> Result<Triangle, DelaunayValidationError> {
    let vertex_count = mesh.vertices.len();
    if let Some(&vertex) = element.to_array().iter().find(|&&v| v >= vertex_count) {
        return Err(DelaunayValidationError::InvalidVertexIndex {
            triangle: position,
            vertex,
            vertex_count,
        });
    }
    Ok(mesh.triangle(element))
}

fn first_encroaching_vertex(
    vertices: &[Point],
    element: TriangleElement,
    triangle: &Triangle,
    relative_tolerance: f64,
) -> Option<usize> {
    let center = triangle.circumcenter();
    let radius = triangle.circumradius();
    if !(center.x.is_finite() && center.y.is_finite() && radius.is_finite()) {
        return None;
    }
    let limit = radius - relative_tolerance * radius.max(1.0);

    vertices
        .iter()
        .enumerate()
        .find(|&(index, &p)| !element.contains(index) && center.distance(p) < limit)
        .map(|(index, _)| index)
}

/// Positions (in `interior`) of every triangle whose circumcircle strictly
/// contains some other vertex of the mesh.
///
/// Degenerate (collinear) triangles have no circumcircle and are skipped;
/// triangles with out-of-range indices are reported as violations.
#[must_use]
pub fn find_delaunay_violations(mesh: &Mesh2D) -> Vec<usize> {
    mesh.interior
        .iter()
        .enumerate()
        .filter(|&(position, &element)| {
            checked_triangle(mesh, position, element).map_or(true, |triangle| {
                first_encroaching_vertex(
                    &mesh.vertices,
                    element,
                    &triangle,
                    DELAUNAY_RELATIVE_TOLERANCE,
                )
                .is_some()
            })
        })
        .map(|(position, _)| position)
        .collect()
}

/// Checks the empty-circumcircle property of every triangle in `mesh`.
///
/// A vertex counts as inside when it is closer to the circumcenter than
/// `r - 1e-9 · max(r, 1)`, so cocircular vertices are accepted.
///
/// # Errors
///
/// Returns the first violation found, in `interior` order.
///
/// # Examples
///
/// ```rust
/// use delaunay_mesh::core::delaunay_triangulation::Delaunay;
/// use delaunay_mesh::core::util::validate_delaunay;
/// use delaunay_mesh::geometry::point::Point;
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(0.9, 0.8),
/// ];
/// let dt = Delaunay::new(&points).unwrap();
/// assert!(validate_delaunay(&dt.to_mesh()).is_ok());
/// ```
pub fn validate_delaunay(mesh: &Mesh2D) -> Result<(), DelaunayValidationError> {
    for (position, &element) in mesh.interior.iter().enumerate() {
        let triangle = checked_triangle(mesh, position, element)?;
        if let Some(vertex) = first_encroaching_vertex(
            &mesh.vertices,
            element,
            &triangle,
            DELAUNAY_RELATIVE_TOLERANCE,
        ) {
            return Err(DelaunayValidationError::DelaunayViolation {
                triangle: position,
                vertex,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(interior: Vec<TriangleElement>) -> Mesh2D {
        Mesh2D {
            vertices: vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, -0.2),
                Point::new(4.0, 0.0),
                Point::new(2.0, 0.2),
            ],
            interior,
            boundary: Vec::new(),
        }
    }

    #[test]
    fn legal_quad_passes() {
        let mesh = quad(vec![
            TriangleElement::new(1, 2, 3),
            TriangleElement::new(3, 0, 1),
        ]);
        assert!(validate_delaunay(&mesh).is_ok());
        assert!(find_delaunay_violations(&mesh).is_empty());
    }

    #[test]
    fn illegal_quad_is_reported() {
        let mesh = quad(vec![
            TriangleElement::new(0, 1, 2),
            TriangleElement::new(0, 2, 3),
        ]);
        assert_eq!(
            validate_delaunay(&mesh),
            Err(DelaunayValidationError::DelaunayViolation {
                triangle: 0,
                vertex: 3
            })
        );
        assert_eq!(find_delaunay_violations(&mesh), vec![0, 1]);
    }

    #[test]
    fn cocircular_vertices_are_accepted() {
        let mesh = Mesh2D {
            vertices: vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ],
            interior: vec![
                TriangleElement::new(0, 1, 2),
                TriangleElement::new(0, 2, 3),
            ],
            boundary: Vec::new(),
        };
        assert!(validate_delaunay(&mesh).is_ok());
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let mesh = quad(vec![TriangleElement::new(0, 1, 9)]);
        assert_eq!(
            validate_delaunay(&mesh),
            Err(DelaunayValidationError::InvalidVertexIndex {
                triangle: 0,
                vertex: 9,
                vertex_count: 4
            })
        );
        assert_eq!(find_delaunay_violations(&mesh), vec![0]);
    }
}
