//! Half-edge mesh topology.
//!
//! Every triangle is a cycle of three directed half-edges linked by `prev`
//! and `next`. Two triangles sharing a side each own one half-edge of it,
//! and those two half-edges are each other's `twin`. A half-edge on the outer
//! boundary has no twin.
//!
//! Storage is two flat arrays:
//!
//! - `edges`: every [`HalfEdge`], addressed by [`EdgeId`]
//! - `triangles`: one representative [`EdgeId`] per triangle, addressed by [`TriangleId`]
//!
//! Both only grow. Splitting a triangle reuses its three edge slots and
//! appends six; flipping an edge overwrites six existing records in place.
//! Handles therefore stay valid for the life of the mesh.
//!
//! # Invariants
//!
//! - `next(next(next(e))) == e` and `prev(next(e)) == e`
//! - `twin(twin(e)) == e` whenever `e` has a twin, with reversed endpoints
//! - all three half-edges of a cycle name the same triangle, and that
//!   triangle's representative is one of them
//!
//! The mutators check these with `debug_assert!` only; [`HalfEdgeMesh::validate`]
//! reports violations as errors.

use crate::core::mesh::Mesh2D;
use crate::core::simplex::{LineElement, TriangleElement};
use std::fmt;
use thiserror::Error;

macro_rules! mesh_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            /// Wraps a raw array index.
            #[must_use]
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// The raw array index.
            #[must_use]
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

mesh_handle!(
    /// Index of a vertex in the owning triangulation's vertex list.
    VertexId
);
mesh_handle!(
    /// Index of a half-edge in [`HalfEdgeMesh`].
    EdgeId
);
mesh_handle!(
    /// Index of a triangle in [`HalfEdgeMesh`].
    TriangleId
);

/// One directed side of a triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    /// Start vertex
    pub origin: VertexId,
    /// End vertex
    pub destination: VertexId,
    /// Previous half-edge of the same triangle
    pub prev: EdgeId,
    /// Next half-edge of the same triangle
    pub next: EdgeId,
    /// Oppositely directed half-edge of the neighbouring triangle; `None` on the boundary
    pub twin: Option<EdgeId>,
    /// Owning triangle
    pub triangle: TriangleId,
}

/// Structural inconsistencies reported by [`HalfEdgeMesh::validate`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HalfEdgeValidationError {
    /// A half-edge refers to an edge or triangle slot that does not exist.
    #[error("Half-edge {edge} refers to a missing {target}")]
    DanglingReference {
        /// The offending half-edge
        edge: EdgeId,
        /// Which reference is dangling
        target: &'static str,
    },
    /// `prev`/`next` do not form a 3-cycle.
    #[error("Half-edge {edge} is not part of a consistent 3-cycle")]
    BrokenCycle {
        /// The offending half-edge
        edge: EdgeId,
    },
    /// The destination of a half-edge is not the origin of its successor.
    #[error("Half-edge {edge} does not end where its successor starts")]
    DisconnectedCycle {
        /// The offending half-edge
        edge: EdgeId,
    },
    /// Twin links are not mutual or the endpoints are not reversed.
    #[error("Half-edge {edge} and its twin are not mutual reversed pairs")]
    TwinMismatch {
        /// The offending half-edge
        edge: EdgeId,
    },
    /// Half-edges of one cycle name different triangles.
    #[error("Half-edge {edge} disagrees with its cycle about the owning triangle")]
    TriangleMismatch {
        /// The offending half-edge
        edge: EdgeId,
    },
    /// A triangle's representative edge does not belong to that triangle.
    #[error("Triangle {triangle} has representative {edge} owned by another triangle")]
    BadRepresentative {
        /// The offending triangle
        triangle: TriangleId,
        /// Its stored representative
        edge: EdgeId,
    },
}

/// Flat-array half-edge mesh.
///
/// # Examples
///
/// ```rust
/// use delaunay_mesh::core::half_edge::{HalfEdgeMesh, VertexId};
///
/// let mut mesh = HalfEdgeMesh::new();
/// let [a, b, c, d] = [0, 1, 2, 3].map(VertexId::new);
/// mesh.add_triangle(a, b, c);
/// mesh.add_triangle(a, c, d);
///
/// assert_eq!(mesh.number_of_triangles(), 2);
/// assert_eq!(mesh.number_of_edges(), 6);
/// assert!(mesh.validate().is_ok());
/// // The shared diagonal is the only pair of twins
/// assert_eq!(mesh.to_mesh().boundary.len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HalfEdgeMesh {
    edges: Vec<HalfEdge>,
    triangles: Vec<EdgeId>,
}

impl HalfEdgeMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            edges: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Creates an empty mesh with room for `triangles` triangles.
    #[must_use]
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            edges: Vec::with_capacity(3 * triangles),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Number of half-edges ever created.
    #[must_use]
    pub const fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of triangles.
    #[must_use]
    pub const fn number_of_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// All half-edge records, indexed by [`EdgeId`].
    #[must_use]
    pub fn edges(&self) -> &[HalfEdge] {
        &self.edges
    }

    /// Whether `edge` addresses an existing half-edge.
    #[must_use]
    #[inline]
    pub const fn is_valid_edge(&self, edge: EdgeId) -> bool {
        edge.0 < self.edges.len()
    }

    /// The half-edge record for `edge`.
    ///
    /// # Panics
    ///
    /// Panics if `edge` is not valid for this mesh.
    #[must_use]
    #[inline]
    pub fn edge(&self, edge: EdgeId) -> &HalfEdge {
        &self.edges[edge.0]
    }

    /// Representative half-edge of `triangle`.
    ///
    /// # Panics
    ///
    /// Panics if `triangle` is not valid for this mesh.
    #[must_use]
    #[inline]
    pub fn triangle_edge(&self, triangle: TriangleId) -> EdgeId {
        self.triangles[triangle.0]
    }

    /// Corner vertices of the cycle starting at `edge`.
    #[must_use]
    pub fn triangle_vertices_from_edge(&self, edge: EdgeId) -> [VertexId; 3] {
        let first = self.edge(edge);
        let apex = self.edge(first.next).destination;
        [first.origin, first.destination, apex]
    }

    /// Corner vertices of `triangle`, starting at its representative edge.
    #[must_use]
    pub fn triangle_vertices(&self, triangle: TriangleId) -> [VertexId; 3] {
        self.triangle_vertices_from_edge(self.triangle_edge(triangle))
    }

    /// Every triangle with its corners, in id order.
    pub fn triangles(&self) -> impl Iterator<Item = (TriangleId, [VertexId; 3])> + '_ {
        (0..self.triangles.len()).map(|index| {
            let triangle = TriangleId(index);
            (triangle, self.triangle_vertices(triangle))
        })
    }

    fn find_edge(&self, origin: VertexId, destination: VertexId) -> Option<EdgeId> {
        self.edges
            .iter()
            .position(|e| e.origin == origin && e.destination == destination)
            .map(EdgeId)
    }

    /// Appends the triangle `v1 → v2 → v3` and links it to existing neighbours.
    ///
    /// Each new half-edge looks for an existing half-edge running the other
    /// way between the same vertices and, if found, the two become twins.
    /// The search is a linear scan over all half-edges.
    pub fn add_triangle(&mut self, v1: VertexId, v2: VertexId, v3: VertexId) -> TriangleId {
        let base = self.edges.len();
        let triangle = TriangleId(self.triangles.len());
        let ids = [EdgeId(base), EdgeId(base + 1), EdgeId(base + 2)];
        let sides = [(v1, v2), (v2, v3), (v3, v1)];
        let twins = sides.map(|(origin, destination)| self.find_edge(destination, origin));

        for (k, ((origin, destination), twin)) in sides.into_iter().zip(twins).enumerate() {
            if let Some(twin) = twin {
                self.edges[twin.0].twin = Some(ids[k]);
            }
            self.edges.push(HalfEdge {
                origin,
                destination,
                prev: ids[(k + 2) % 3],
                next: ids[(k + 1) % 3],
                twin,
                triangle,
            });
        }
        self.triangles.push(ids[0]);
        triangle
    }

    /// Splits `triangle` into three around `vertex`.
    ///
    /// With `e1, e2, e3` the triangle's cycle starting at its representative,
    /// each `e_k` keeps its endpoints and twin and becomes the outer side of
    /// one sub-triangle whose apex is `vertex`. The sub-triangle on `e1`
    /// keeps the id `triangle`; those on `e2` and `e3` get the next two ids.
    /// Six spoke half-edges are appended, paired as twins.
    ///
    /// Returns `[e1, e2, e3]`, the sides that may now violate the Delaunay
    /// condition.
    pub fn refine_triangle(&mut self, triangle: TriangleId, vertex: VertexId) -> [EdgeId; 3] {
        debug_assert!(triangle.0 < self.triangles.len(), "unknown {triangle}");

        let e1 = self.triangles[triangle.0];
        let e2 = self.edges[e1.0].next;
        let e3 = self.edges[e2.0].next;
        let outer = [e1, e2, e3];

        let n = self.edges.len();
        let spoke = |k: usize| EdgeId(n + k);
        let sub_triangles = [
            triangle,
            TriangleId(self.triangles.len()),
            TriangleId(self.triangles.len() + 1),
        ];
        // Spoke 2k leaves the sub-triangle on e_k towards `vertex`, spoke 2k+1
        // comes back; the twin of the inward spoke is the previous
        // sub-triangle's outward spoke.
        let inward_twin = [spoke(3), spoke(5), spoke(1)];
        let outward_twin = [spoke(4), spoke(0), spoke(2)];

        for k in 0..3 {
            let side = outer[k];
            let HalfEdge {
                origin,
                destination,
                ..
            } = self.edges[side.0];
            let to_vertex = spoke(2 * k);
            let from_vertex = spoke(2 * k + 1);
            let owner = sub_triangles[k];

            let record = &mut self.edges[side.0];
            record.prev = from_vertex;
            record.next = to_vertex;
            record.triangle = owner;

            self.edges.push(HalfEdge {
                origin: destination,
                destination: vertex,
                prev: side,
                next: from_vertex,
                twin: Some(inward_twin[k]),
                triangle: owner,
            });
            self.edges.push(HalfEdge {
                origin: vertex,
                destination: origin,
                prev: to_vertex,
                next: side,
                twin: Some(outward_twin[k]),
                triangle: owner,
            });

            if k == 0 {
                self.triangles[triangle.0] = side;
            } else {
                self.triangles.push(side);
            }
        }

        debug_assert!(self.validate().is_ok(), "split of {triangle} broke the mesh");
        outer
    }

    /// Flips the diagonal shared by the two triangles on either side of `edge`.
    ///
    /// Given the quadrilateral formed by the triangles of `edge` and of its
    /// twin, `edge` is redirected to join the two apexes. Both triangles keep
    /// their ids; `edge` and its twin keep theirs and become the
    /// representatives of their triangles. `edge` must have a twin.
    pub fn flip_edge(&mut self, edge: EdgeId) {
        let twin = self.edges[edge.0].twin;
        debug_assert!(twin.is_some(), "cannot flip boundary edge {edge}");
        let Some(twin) = twin else {
            return;
        };

        let HalfEdge {
            prev: edge_prev,
            next: edge_next,
            triangle: edge_triangle,
            ..
        } = self.edges[edge.0];
        let HalfEdge {
            prev: twin_prev,
            next: twin_next,
            triangle: twin_triangle,
            ..
        } = self.edges[twin.0];
        let edge_apex = self.edges[edge_next.0].destination;
        let twin_apex = self.edges[twin_next.0].destination;

        self.relink(edge_prev, edge, twin_next, edge_triangle);
        self.relink(twin_next, edge_prev, edge, edge_triangle);
        self.edges[edge.0] = HalfEdge {
            origin: twin_apex,
            destination: edge_apex,
            prev: twin_next,
            next: edge_prev,
            twin: Some(twin),
            triangle: edge_triangle,
        };
        self.triangles[edge_triangle.0] = edge;

        self.relink(twin_prev, twin, edge_next, twin_triangle);
        self.relink(edge_next, twin_prev, twin, twin_triangle);
        self.edges[twin.0] = HalfEdge {
            origin: edge_apex,
            destination: twin_apex,
            prev: edge_next,
            next: twin_prev,
            twin: Some(edge),
            triangle: twin_triangle,
        };
        self.triangles[twin_triangle.0] = twin;

        debug_assert!(self.validate().is_ok(), "flip of {edge} broke the mesh");
    }

    fn relink(&mut self, edge: EdgeId, prev: EdgeId, next: EdgeId, triangle: TriangleId) {
        let record = &mut self.edges[edge.0];
        record.prev = prev;
        record.next = next;
        record.triangle = triangle;
    }

    /// Exports triangles and boundary edges with raw vertex ids.
    ///
    /// Interior triangles are emitted in id order, each starting at its
    /// representative edge; boundary edges are the half-edges without a
    /// twin, in edge order. `vertices` is left empty since the topology does
    /// not know coordinates.
    #[must_use]
    pub fn to_mesh(&self) -> Mesh2D {
        let interior = self
            .triangles()
            .map(|(_, [a, b, c])| TriangleElement::new(a.0, b.0, c.0))
            .collect();
        let boundary = self
            .edges
            .iter()
            .filter(|e| e.twin.is_none())
            .map(|e| LineElement::new(e.origin.0, e.destination.0))
            .collect();
        Mesh2D {
            vertices: Vec::new(),
            interior,
            boundary,
        }
    }

    /// Checks every structural invariant listed in the module documentation.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), HalfEdgeValidationError> {
        for (index, record) in self.edges.iter().enumerate() {
            let edge = EdgeId(index);
            let dangling = |target| HalfEdgeValidationError::DanglingReference { edge, target };

            if !self.is_valid_edge(record.prev) {
                return Err(dangling("prev edge"));
            }
            if !self.is_valid_edge(record.next) {
                return Err(dangling("next edge"));
            }
            if record.triangle.0 >= self.triangles.len() {
                return Err(dangling("triangle"));
            }

            let next = self.edge(record.next);
            if self.edge(record.prev).next != edge || next.prev != edge {
                return Err(HalfEdgeValidationError::BrokenCycle { edge });
            }
            if !self.is_valid_edge(next.next) || self.edge(next.next).next != edge {
                return Err(HalfEdgeValidationError::BrokenCycle { edge });
            }
            if record.destination != next.origin {
                return Err(HalfEdgeValidationError::DisconnectedCycle { edge });
            }
            if next.triangle != record.triangle {
                return Err(HalfEdgeValidationError::TriangleMismatch { edge });
            }

            if let Some(twin) = record.twin {
                if !self.is_valid_edge(twin) {
                    return Err(dangling("twin edge"));
                }
                let partner = self.edge(twin);
                if partner.twin != Some(edge)
                    || partner.origin != record.destination
                    || partner.destination != record.origin
                {
                    return Err(HalfEdgeValidationError::TwinMismatch { edge });
                }
            }
        }

        for (index, &edge) in self.triangles.iter().enumerate() {
            let triangle = TriangleId(index);
            if !self.is_valid_edge(edge) || self.edge(edge).triangle != triangle {
                return Err(HalfEdgeValidationError::BadRepresentative { triangle, edge });
            }
        }
        Ok(())
    }
}
