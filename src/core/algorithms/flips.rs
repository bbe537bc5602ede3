//! Lawson edge-flip legalization.
//!
//! After a triangle is split, the three outer sides of the new triangles may
//! violate the empty-circumcircle condition. An edge is illegal when the apex
//! of the neighbouring triangle lies strictly inside the circumcircle of the
//! edge's own triangle; flipping it replaces the shared diagonal and exposes
//! two new candidate edges on the far side.
//!
//! Legalization runs on an explicit LIFO worklist. Edges are visited in the
//! same depth-first order a recursive formulation would use: after a flip,
//! the twin triangle's former `next` edge is examined (and fully resolved)
//! before its former `prev` edge.
//!
//! # References
//!
//! - Lawson, C.L. "Software for C¹ surface interpolation" *Mathematical
//!   Software III* (1977): 161-194
//! - de Berg, M. et al. *Computational Geometry: Algorithms and Applications*,
//!   3rd ed., chapter 9

use crate::core::half_edge::{EdgeId, HalfEdgeMesh};
use crate::geometry::point::Point;
use crate::geometry::predicates::in_circle_determinant;
use smallvec::SmallVec;
use tracing::trace;

/// Inline capacity of the legalization worklist before it spills to the heap.
const WORKLIST_INLINE_CAPACITY: usize = 16;

/// Whether `edge` violates the empty-circumcircle condition.
///
/// Boundary edges (no twin) are always legal. Otherwise, with `a` the apex
/// of the edge's own triangle and `b` the apex across the twin, the edge is
/// illegal when `in_circle_determinant(dest, a, origin, b) > 0`.
#[must_use]
pub fn is_illegal_edge(mesh: &HalfEdgeMesh, vertices: &[Point], edge: EdgeId) -> bool {
    let record = mesh.edge(edge);
    let Some(twin) = record.twin else {
        return false;
    };
    if !mesh.is_valid_edge(twin) {
        return false;
    }

    let own_apex = mesh.edge(record.next).destination;
    let twin_apex = mesh.edge(mesh.edge(twin).next).destination;
    in_circle_determinant(
        vertices[record.destination.index()],
        vertices[own_apex.index()],
        vertices[record.origin.index()],
        vertices[twin_apex.index()],
    ) > 0.0
}

/// Flips illegal edges until `seeds` and every edge they expose are legal.
///
/// Seeds are examined in order. Returns the number of flips performed.
pub fn legalize_edges(mesh: &mut HalfEdgeMesh, vertices: &[Point], seeds: &[EdgeId]) -> usize {
    let mut worklist: SmallVec<[EdgeId; WORKLIST_INLINE_CAPACITY]> =
        seeds.iter().rev().copied().collect();
    let mut flips = 0;

    while let Some(edge) = worklist.pop() {
        if !is_illegal_edge(mesh, vertices, edge) {
            continue;
        }
        let Some(twin) = mesh.edge(edge).twin else {
            continue;
        };
        let exposed_next = mesh.edge(twin).next;
        let exposed_prev = mesh.edge(twin).prev;

        mesh.flip_edge(edge);
        flips += 1;
        trace!(
            edge = edge.index(),
            exposed_next = exposed_next.index(),
            exposed_prev = exposed_prev.index(),
            "flipped illegal edge"
        );

        worklist.push(exposed_prev);
        worklist.push(exposed_next);
    }
    flips
}
