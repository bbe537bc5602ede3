//! Incremental Delaunay triangulation.
//!
//! [`Delaunay`] builds a triangulation by inserting points one at a time
//! into a [`HalfEdgeMesh`]:
//!
//! 1. The mesh is seeded with a large triangle enclosing every input point.
//!    Its corners occupy vertex ids 0, 1 and 2.
//! 2. Each point is located by a linear scan ([`locate_triangle`]), the
//!    containing triangle is split into three around it, and the three
//!    outer sides are legalized by Lawson flips ([`legalize_edges`]).
//! 3. [`Delaunay::to_mesh`] strips every triangle touching the enclosing
//!    corners and shifts the remaining indices down by three, so exported
//!    indices match the order points were supplied in.
//!
//! After every successful insertion the mesh satisfies the local Delaunay
//! condition on every edge.
//!
//! # Examples
//!
//! ```rust
//! use delaunay_mesh::core::delaunay_triangulation::Delaunay;
//! use delaunay_mesh::geometry::point::Point;
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let mut dt = Delaunay::new(&points).unwrap();
//! assert_eq!(dt.number_of_triangles(), 2);
//!
//! let index = dt.insert(Point::new(0.5, 0.4)).unwrap();
//! assert_eq!(index, 4);
//!
//! let mesh = dt.to_mesh();
//! assert_eq!(mesh.vertices.len(), 5);
//! assert_eq!(mesh.interior.len(), 4);
//! assert_eq!(mesh.boundary.len(), 4);
//! ```

use crate::core::algorithms::flips::legalize_edges;
use crate::core::algorithms::locate::{LocateError, locate_triangle};
use crate::core::half_edge::{HalfEdgeMesh, HalfEdgeValidationError, TriangleId, VertexId};
use crate::core::mesh::Mesh2D;
use crate::core::options::TriangulationOptions;
use crate::core::simplex::{LineElement, TriangleElement};
use crate::core::util::{DelaunayValidationError, validate_delaunay};
use crate::geometry::point::{Point, PointValidationError};
use crate::geometry::triangle::Triangle;
use thiserror::Error;
use tracing::{debug, trace};

/// Number of enclosing-triangle vertices stored ahead of the input points.
pub const SUPER_VERTEX_COUNT: usize = 3;

/// Errors raised while inserting a single point.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InsertionError {
    /// The point has a non-finite coordinate
    #[error("Invalid point: {0}")]
    InvalidPoint(#[from] PointValidationError),

    /// Point location failed
    #[error("Location error: {0}")]
    Location(#[from] LocateError),
}

/// Errors raised while constructing a triangulation from a point set.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TriangulationConstructionError {
    /// No points were supplied, so there is nothing to enclose.
    #[error("Cannot triangulate an empty point set")]
    EmptyInput,

    /// Inserting one of the input points failed.
    #[error("Failed to insert point {index}: {source}")]
    FailedToInsertVertex {
        /// Position of the point in the input
        index: usize,
        /// The underlying insertion error
        #[source]
        source: InsertionError,
    },
}

/// What a single insertion did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsertionStatistics {
    /// Index of the new vertex in exported meshes
    pub vertex: usize,
    /// Triangle that contained the point and was split
    pub located: TriangleId,
    /// Number of edge flips performed during legalization
    pub flips: usize,
}

/// An incremental 2D Delaunay triangulation.
#[derive(Clone, Debug)]
pub struct Delaunay {
    /// Enclosing-triangle corners followed by the inserted points
    vertices: Vec<Point>,
    mesh: HalfEdgeMesh,
    options: TriangulationOptions,
}

impl Delaunay {
    /// Triangulates `points` with default options.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationConstructionError::EmptyInput`] for an empty
    /// slice and [`TriangulationConstructionError::FailedToInsertVertex`] if
    /// a point has a non-finite coordinate.
    pub fn new(points: &[Point]) -> Result<Self, TriangulationConstructionError> {
        Self::with_options(points, TriangulationOptions::default())
    }

    /// Triangulates `points`, inserting them in the given order.
    ///
    /// # Errors
    ///
    /// See [`Delaunay::new`].
    pub fn with_options(
        points: &[Point],
        options: TriangulationOptions,
    ) -> Result<Self, TriangulationConstructionError> {
        for (index, point) in points.iter().enumerate() {
            point.validate().map_err(|err| {
                TriangulationConstructionError::FailedToInsertVertex {
                    index,
                    source: err.into(),
                }
            })?;
        }

        let enclosing = Triangle::containing(points, options.super_triangle_dilation)
            .ok_or(TriangulationConstructionError::EmptyInput)?;
        let mut dt = Self::from_enclosing_triangle(enclosing, points.len(), options);

        let mut flips = 0;
        for (index, &point) in points.iter().enumerate() {
            let stats = dt.insert_with_statistics(point).map_err(|source| {
                TriangulationConstructionError::FailedToInsertVertex { index, source }
            })?;
            flips += stats.flips;
        }

        debug!(
            vertices = dt.number_of_vertices(),
            triangles = dt.number_of_triangles(),
            flips,
            "constructed Delaunay triangulation"
        );
        Ok(dt)
    }

    fn from_enclosing_triangle(
        enclosing: Triangle,
        expected_points: usize,
        options: TriangulationOptions,
    ) -> Self {
        let mut vertices = Vec::with_capacity(SUPER_VERTEX_COUNT + expected_points);
        vertices.extend(enclosing.vertices());

        // Each insertion adds two triangles
        let mut mesh = HalfEdgeMesh::with_capacity(1 + 2 * expected_points);
        mesh.add_triangle(VertexId::new(0), VertexId::new(1), VertexId::new(2));

        Self {
            vertices,
            mesh,
            options,
        }
    }

    /// Inserts `point` and restores the Delaunay condition.
    ///
    /// Returns the index of the new vertex in [`to_mesh`](Self::to_mesh)
    /// output. On error the triangulation is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`InsertionError::InvalidPoint`] for non-finite coordinates and
    /// [`InsertionError::Location`] if the point is outside the enclosing
    /// triangle.
    pub fn insert(&mut self, point: Point) -> Result<usize, InsertionError> {
        self.insert_with_statistics(point).map(|stats| stats.vertex)
    }

    /// Like [`insert`](Self::insert), reporting what the insertion did.
    ///
    /// # Errors
    ///
    /// See [`Delaunay::insert`].
    pub fn insert_with_statistics(
        &mut self,
        point: Point,
    ) -> Result<InsertionStatistics, InsertionError> {
        point.validate()?;
        let located = locate_triangle(
            &self.mesh,
            &self.vertices,
            point,
            self.options.containment_epsilon,
        )?;

        let vertex = VertexId::new(self.vertices.len());
        self.vertices.push(point);
        let outer = self.mesh.refine_triangle(located, vertex);
        let flips = legalize_edges(&mut self.mesh, &self.vertices, &outer);

        trace!(
            vertex = vertex.index(),
            located = located.index(),
            flips,
            "inserted point"
        );
        Ok(InsertionStatistics {
            vertex: vertex.index() - SUPER_VERTEX_COUNT,
            located,
            flips,
        })
    }

    /// Exports the triangulation without the enclosing triangle.
    ///
    /// Triangles with all three corners among the inserted points become
    /// `interior`, in triangle-id order. A triangle with exactly one
    /// enclosing corner contributes its opposite side to `boundary`; these
    /// are the edges of the convex hull. Indices refer to `vertices`, which
    /// holds the inserted points in insertion order.
    #[must_use]
    pub fn to_mesh(&self) -> Mesh2D {
        let mut interior = Vec::with_capacity(self.mesh.number_of_triangles());
        let mut boundary = Vec::new();

        for (_, corners) in self.mesh.triangles() {
            match corners.map(|v| v.index().checked_sub(SUPER_VERTEX_COUNT)) {
                [Some(i), Some(j), Some(k)] => interior.push(TriangleElement::new(i, j, k)),
                [None, Some(j), Some(k)] => boundary.push(LineElement::new(j, k)),
                [Some(i), None, Some(k)] => boundary.push(LineElement::new(k, i)),
                [Some(i), Some(j), None] => boundary.push(LineElement::new(i, j)),
                _ => {}
            }
        }
        // Hull edges are reported from the most recently created triangle back
        boundary.reverse();

        Mesh2D {
            vertices: self.vertices().to_vec(),
            interior,
            boundary,
        }
    }

    fn is_interior(corners: [VertexId; 3]) -> bool {
        corners.iter().all(|v| v.index() >= SUPER_VERTEX_COUNT)
    }

    fn triangle_from(&self, [a, b, c]: [VertexId; 3]) -> Triangle {
        Triangle::new(
            self.vertices[a.index()],
            self.vertices[b.index()],
            self.vertices[c.index()],
        )
    }

    /// The interior triangle with the smallest minimum angle, and that angle in radians.
    ///
    /// Triangles are scanned in id order and the first one with the
    /// strictly smallest angle wins. `None` if no triangle avoids the
    /// enclosing corners.
    #[must_use]
    pub fn smallest_angle(&self) -> Option<(Triangle, f64)> {
        self.mesh
            .triangles()
            .filter(|&(_, corners)| Self::is_interior(corners))
            .map(|(_, corners)| {
                let triangle = self.triangle_from(corners);
                (triangle, triangle.smallest_angle())
            })
            .fold(None, |best, candidate| match best {
                None => Some(candidate),
                Some((_, best_angle)) if candidate.1 < best_angle => Some(candidate),
                Some(_) => best,
            })
    }

    /// The interior triangle with the smallest minimum angle.
    #[must_use]
    pub fn smallest_angle_triangle(&self) -> Option<Triangle> {
        self.smallest_angle().map(|(triangle, _)| triangle)
    }

    /// Number of inserted points.
    #[must_use]
    pub const fn number_of_vertices(&self) -> usize {
        self.vertices.len() - SUPER_VERTEX_COUNT
    }

    /// Number of triangles not touching the enclosing triangle.
    #[must_use]
    pub fn number_of_triangles(&self) -> usize {
        self.mesh
            .triangles()
            .filter(|&(_, corners)| Self::is_interior(corners))
            .count()
    }

    /// Inserted points, in insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices[SUPER_VERTEX_COUNT..]
    }

    /// The enclosing triangle seeded at construction.
    #[must_use]
    pub fn super_triangle(&self) -> Triangle {
        Triangle::new(self.vertices[0], self.vertices[1], self.vertices[2])
    }

    /// Options this triangulation was built with.
    #[must_use]
    pub const fn options(&self) -> &TriangulationOptions {
        &self.options
    }

    /// Underlying half-edge topology, including the enclosing triangle.
    #[must_use]
    pub const fn half_edge_mesh(&self) -> &HalfEdgeMesh {
        &self.mesh
    }

    /// Checks the structural invariants of the half-edge mesh.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation found.
    pub fn is_valid(&self) -> Result<(), HalfEdgeValidationError> {
        self.mesh.validate()
    }

    /// Checks the empty-circumcircle property of the exported mesh.
    ///
    /// # Errors
    ///
    /// Returns the first violating triangle.
    pub fn validate_delaunay(&self) -> Result<(), DelaunayValidationError> {
        validate_delaunay(&self.to_mesh())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn init_tracing() {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_test_writer()
                .try_init();
        });
    }

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn square_exports_two_triangles() {
        init_tracing();
        let dt = Delaunay::new(&unit_square()).unwrap();
        let mesh = dt.to_mesh();

        assert_eq!(
            mesh.interior,
            vec![TriangleElement::new(2, 0, 1), TriangleElement::new(0, 2, 3)]
        );
        assert_eq!(mesh.boundary.len(), 4);
        for edge in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            assert!(
                mesh.boundary
                    .iter()
                    .any(|e| e.undirected_eq(LineElement::from([edge.0, edge.1])))
            );
        }
        assert!(dt.is_valid().is_ok());
        assert!(dt.validate_delaunay().is_ok());
    }

    #[test]
    fn enclosing_triangle_occupies_first_ids() {
        let points = unit_square();
        let dt = Delaunay::new(&points).unwrap();
        let enclosing = dt.super_triangle();
        assert!(points.iter().all(|&p| enclosing.contains(p)));
        assert_relative_eq!(enclosing.a.x, -1e5);
        assert_relative_eq!(enclosing.a.y, -1e5);
        assert_eq!(dt.vertices(), points.as_slice());
        assert_eq!(dt.number_of_vertices(), 4);
        // Four points: two interior triangles plus the fan to the enclosing corners
        assert_eq!(dt.half_edge_mesh().number_of_triangles(), 9);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            Delaunay::new(&[]).unwrap_err(),
            TriangulationConstructionError::EmptyInput
        );
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let points = [Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        let err = Delaunay::new(&points).unwrap_err();
        assert!(matches!(
            err,
            TriangulationConstructionError::FailedToInsertVertex {
                index: 1,
                source: InsertionError::InvalidPoint(_)
            }
        ));
    }

    #[test]
    fn single_point_has_no_interior() {
        let dt = Delaunay::new(&[Point::new(2.0, 3.0)]).unwrap();
        let mesh = dt.to_mesh();
        assert_eq!(mesh.vertices, vec![Point::new(2.0, 3.0)]);
        assert!(mesh.interior.is_empty());
        assert!(mesh.boundary.is_empty());
        assert_eq!(dt.number_of_triangles(), 0);
        assert!(dt.smallest_angle_triangle().is_none());
    }

    #[test]
    fn failed_insert_leaves_state_untouched() {
        let mut dt = Delaunay::new(&unit_square()).unwrap();
        let before = dt.to_mesh();
        let edges_before = dt.half_edge_mesh().number_of_edges();

        let outside = dt.insert(Point::new(1e7, 1e7));
        assert!(matches!(
            outside,
            Err(InsertionError::Location(LocateError::Outside { .. }))
        ));
        let invalid = dt.insert(Point::new(0.5, f64::INFINITY));
        assert!(matches!(invalid, Err(InsertionError::InvalidPoint(_))));

        assert_eq!(dt.to_mesh(), before);
        assert_eq!(dt.half_edge_mesh().number_of_edges(), edges_before);
    }

    #[test]
    fn insert_reports_statistics() {
        let mut dt = Delaunay::new(&unit_square()).unwrap();
        let stats = dt.insert_with_statistics(Point::new(0.5, 0.5)).unwrap();
        assert_eq!(stats.vertex, 4);
        assert_eq!(dt.number_of_vertices(), 5);
        assert_eq!(dt.number_of_triangles(), 4);
        assert!(dt.is_valid().is_ok());
        assert!(dt.validate_delaunay().is_ok());
    }

    #[test]
    fn smallest_angle_of_square() {
        let dt = Delaunay::new(&unit_square()).unwrap();
        let (triangle, angle) = dt.smallest_angle().unwrap();
        assert_relative_eq!(angle.to_degrees(), 45.0, epsilon = 1e-9);
        assert_eq!(dt.smallest_angle_triangle(), Some(triangle));
    }

    #[test]
    fn custom_options_are_kept() {
        let options = TriangulationOptions {
            containment_epsilon: 1e-10,
            super_triangle_dilation: 10.0,
        };
        let dt = Delaunay::with_options(&unit_square(), options).unwrap();
        assert_eq!(dt.options(), &options);
        assert_relative_eq!(dt.super_triangle().a.x, -10.0);
        assert_eq!(dt.number_of_triangles(), 2);
    }
}
