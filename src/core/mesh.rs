//! Exported triangle mesh.
//!
//! [`Mesh2D`] is the snapshot handed to consumers (finite-element assembly,
//! plotting, file writers). It is a plain owned value: vertices, interior
//! triangles and boundary edges, all indices referring to `vertices`.

use crate::core::simplex::{LineElement, TriangleElement};
use crate::geometry::point::Point;
use crate::geometry::triangle::Triangle;
use rustc_hash::FxHashSet;

/// A triangle mesh with its boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh2D {
    /// Vertex coordinates
    pub vertices: Vec<Point>,
    /// Triangles, counter-clockwise
    pub interior: Vec<TriangleElement>,
    /// Edges with a triangle on one side only
    pub boundary: Vec<LineElement>,
}

impl Mesh2D {
    /// Number of vertices.
    #[must_use]
    pub const fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub const fn number_of_triangles(&self) -> usize {
        self.interior.len()
    }

    /// Number of boundary edges.
    #[must_use]
    pub const fn number_of_boundary_edges(&self) -> usize {
        self.boundary.len()
    }

    /// Every triangle's three directed edges, in triangle order.
    ///
    /// Interior edges appear twice (once per adjacent triangle, in opposite
    /// directions); see [`unique_edges`](Self::unique_edges) for the edge set.
    #[must_use]
    pub fn all_edges(&self) -> Vec<LineElement> {
        self.interior
            .iter()
            .flat_map(|triangle| triangle.edges())
            .collect()
    }

    /// The undirected edge set, each edge in [`LineElement::canonical`] form.
    #[must_use]
    pub fn unique_edges(&self) -> FxHashSet<LineElement> {
        self.interior
            .iter()
            .flat_map(|triangle| triangle.edges())
            .map(LineElement::canonical)
            .collect()
    }

    /// Geometric triangle for `element`.
    ///
    /// # Panics
    ///
    /// Panics if `element` refers past the end of `vertices`.
    #[must_use]
    pub fn triangle(&self, element: TriangleElement) -> Triangle {
        Triangle::new(
            self.vertices[element.i],
            self.vertices[element.j],
            self.vertices[element.k],
        )
    }

    /// Geometric triangles in `interior` order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.interior.iter().map(|&element| self.triangle(element))
    }

    /// Whether the undirected edge `edge` is a side of some triangle.
    #[must_use]
    pub fn has_edge(&self, edge: LineElement) -> bool {
        self.interior
            .iter()
            .any(|triangle| triangle.edges().iter().any(|e| e.undirected_eq(edge)))
    }
}
