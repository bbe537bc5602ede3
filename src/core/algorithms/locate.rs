//! Point location.
//!
//! Finds the triangle containing a query point by scanning triangles in id
//! order and returning the first one that passes the tolerant half-plane
//! test. The scan is linear in the number of triangles; when a point lies on
//! a shared edge (or within tolerance of it) the lower triangle id wins.

use crate::core::half_edge::{HalfEdgeMesh, TriangleId};
use crate::geometry::point::Point;
use crate::geometry::predicates::triangle_contains;

/// Error during point location.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocateError {
    /// Triangulation has no triangles
    #[error("Cannot locate in empty triangulation")]
    EmptyTriangulation,

    /// No triangle contains the point
    #[error("Point {point} is not contained in any triangle")]
    Outside {
        /// The query point
        point: Point,
    },
}

/// Returns the first triangle (in id order) containing `point`.
///
/// `vertices` supplies the coordinates for the mesh's vertex ids and
/// `epsilon` widens each triangle as described in
/// [`triangle_contains`](crate::geometry::predicates::triangle_contains).
///
/// # Errors
///
/// Returns [`LocateError::EmptyTriangulation`] if the mesh has no triangles and
/// [`LocateError::Outside`] if none of them contains `point`.
///
/// # Examples
///
/// ```rust
/// use delaunay_mesh::core::algorithms::locate::locate_triangle;
/// use delaunay_mesh::core::half_edge::{HalfEdgeMesh, TriangleId, VertexId};
/// use delaunay_mesh::geometry::point::Point;
///
/// let vertices = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
/// let mut mesh = HalfEdgeMesh::new();
/// mesh.add_triangle(VertexId::new(0), VertexId::new(1), VertexId::new(2));
///
/// let found = locate_triangle(&mesh, &vertices, Point::new(0.2, 0.2), 1e-8).unwrap();
/// assert_eq!(found, TriangleId::new(0));
/// assert!(locate_triangle(&mesh, &vertices, Point::new(2.0, 2.0), 1e-8).is_err());
/// ```
pub fn locate_triangle(
    mesh: &HalfEdgeMesh,
    vertices: &[Point],
    point: Point,
    epsilon: f64,
) -> Result<TriangleId, LocateError> {
    if mesh.number_of_triangles() == 0 {
        return Err(LocateError::EmptyTriangulation);
    }

    mesh.triangles()
        .find(|&(_, [a, b, c])| {
            triangle_contains(
                point,
                vertices[a.index()],
                vertices[b.index()],
                vertices[c.index()],
                epsilon,
            )
        })
        .map(|(triangle, _)| triangle)
        .ok_or(LocateError::Outside { point })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::half_edge::VertexId;
    use crate::geometry::predicates::CONTAINMENT_EPSILON;

    fn square() -> (HalfEdgeMesh, Vec<Point>) {
        let vertices = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let [a, b, c, d] = [0, 1, 2, 3].map(VertexId::new);
        let mut mesh = HalfEdgeMesh::new();
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);
        (mesh, vertices)
    }

    #[test]
    fn locates_interior_points() {
        let (mesh, vertices) = square();
        let lower = locate_triangle(&mesh, &vertices, Point::new(0.8, 0.2), CONTAINMENT_EPSILON);
        let upper = locate_triangle(&mesh, &vertices, Point::new(0.2, 0.8), CONTAINMENT_EPSILON);
        assert_eq!(lower, Ok(TriangleId::new(0)));
        assert_eq!(upper, Ok(TriangleId::new(1)));
    }

    #[test]
    fn shared_edge_goes_to_lowest_id() {
        let (mesh, vertices) = square();
        let on_diagonal = Point::new(0.5, 0.5);
        assert_eq!(
            locate_triangle(&mesh, &vertices, on_diagonal, CONTAINMENT_EPSILON),
            Ok(TriangleId::new(0))
        );
    }

    #[test]
    fn outside_and_empty() {
        let (mesh, vertices) = square();
        let far = Point::new(3.0, -1.0);
        assert_eq!(
            locate_triangle(&mesh, &vertices, far, CONTAINMENT_EPSILON),
            Err(LocateError::Outside { point: far })
        );
        assert_eq!(
            locate_triangle(&HalfEdgeMesh::new(), &vertices, far, CONTAINMENT_EPSILON),
            Err(LocateError::EmptyTriangulation)
        );
        assert_eq!(
            LocateError::EmptyTriangulation.to_string(),
            "Cannot locate in empty triangulation"
        );
    }
}
