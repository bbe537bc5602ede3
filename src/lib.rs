//! # delaunay-mesh
//!
//! Incremental 2D Delaunay triangulation on a half-edge mesh, with
//! Ruppert-style quality refinement of planar straight-line graphs.
//!
//! # Features
//!
//! - Incremental insertion inside a super-triangle with Lawson edge flips
//! - Explicit half-edge connectivity with typed vertex, edge and triangle handles
//! - Planar straight-line graphs (PSLGs) as refinement constraints
//! - Minimum-angle refinement by segment splitting and circumcenter insertion
//! - Export to plain index meshes ([`Mesh2D`](core::mesh::Mesh2D)) with boundary edges
//! - Validation helpers for the Delaunay property, half-edge consistency and
//!   the Euler characteristic
//!
//! # Basic Usage
//!
//! ```rust
//! use delaunay_mesh::prelude::*;
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let dt = Delaunay::new(&points).unwrap();
//! let mesh = dt.to_mesh();
//!
//! assert_eq!(mesh.number_of_vertices(), 4);
//! assert_eq!(mesh.number_of_triangles(), 2);
//! assert_eq!(mesh.number_of_boundary_edges(), 4);
//! assert!(validate_delaunay(&mesh).is_ok());
//! ```
//!
//! # Quality Refinement
//!
//! ```rust
//! use delaunay_mesh::prelude::*;
//!
//! let mut graph = PlanarStraightLineGraph::new();
//! graph
//!     .add_closed_line_segments(&regular_polygon(20, Point::origin(), 1.0))
//!     .unwrap();
//!
//! let mut refined = RefinedDelaunay::new(graph).unwrap();
//! refined.insert(Point::origin()).unwrap();
//! let stats = refined.refine(25.0).unwrap();
//!
//! let mesh = refined.to_mesh();
//! assert!(mesh_smallest_angle_degrees(&mesh).unwrap() >= 25.0);
//! assert!(stats.circumcenter_insertions + stats.segment_splits > 0);
//! ```
//!
//! # Triangulation Invariants
//!
//! After every successful insertion:
//!
//! - **Half-edge consistency** – every `next`/`prev` cycle has length three,
//!   twins are mutual and reversed, and each triangle's representative edge
//!   belongs to it. Checked by [`Delaunay::is_valid`](core::delaunay_triangulation::Delaunay::is_valid).
//! - **Orientation** – every triangle is counterclockwise.
//! - **Delaunay property** – no vertex lies strictly inside the circumcircle
//!   of a triangle, up to a small relative tolerance. Checked by
//!   [`Delaunay::validate_delaunay`](core::delaunay_triangulation::Delaunay::validate_delaunay).
//! - **Topology** – the exported mesh is a triangulated disc, `V − E + F = 1`.
//!   Checked by [`validate_planar_disc`](topology::characteristics::euler::validate_planar_disc).
//!
//! A failed insertion (non-finite coordinates, or a point outside the
//! super-triangle) returns an error and leaves the triangulation unchanged.
//!
//! # Numerics
//!
//! Predicates are evaluated in plain `f64` arithmetic. Point location uses
//! an absolute tolerance of `1e-8`, so points on an edge land in one of its
//! two triangles; duplicate points are not detected.
//!
//! # References
//!
//! - Lawson, C.L. "Software for C¹ surface interpolation" *Mathematical
//!   Software III* (1977): 161-194
//! - de Berg, M., Cheong, O., van Kreveld, M., Overmars, M. *Computational
//!   Geometry: Algorithms and Applications*, 3rd ed. Springer (2008), ch. 9
//! - Ruppert, J. "A Delaunay Refinement Algorithm for Quality 2-Dimensional
//!   Mesh Generation" *Journal of Algorithms* 18.3 (1995): 548-585

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// The `core` module contains the triangulation data structures and algorithms.
///
/// It includes the half-edge mesh, the [`Delaunay`](core::delaunay_triangulation::Delaunay)
/// engine, planar straight-line graphs and the refinement engine built on top
/// of them, plus the plain [`Mesh2D`](core::mesh::Mesh2D) export format.
pub mod core {
    /// Triangulation algorithms for construction and maintenance
    pub mod algorithms {
        /// Lawson edge legalization
        pub mod flips;
        /// Point location
        pub mod locate;
    }
    pub mod delaunay_triangulation;
    /// Half-edge connectivity
    pub mod half_edge;
    pub mod mesh;
    /// Builder-configured tolerances for triangulation and refinement
    pub mod options;
    pub mod pslg;
    pub mod refined_delaunay;
    /// Vertex-index records for segments and triangles
    pub mod simplex;
    pub mod util;
    // Re-export the `core` modules.
    pub use delaunay_triangulation::*;
    pub use half_edge::*;
    pub use mesh::*;
    pub use options::*;
    pub use pslg::*;
    pub use refined_delaunay::*;
    pub use simplex::*;
    pub use util::*;
}

/// Contains geometric types including the `Point` struct and geometry predicates.
pub mod geometry {
    pub mod point;
    pub mod predicates;
    /// Triangle quality measures
    pub mod quality;
    pub mod rectangle;
    pub mod triangle;
    pub mod util;
    pub use point::*;
    pub use predicates::*;
    pub use quality::*;
    pub use rectangle::*;
    pub use triangle::*;
    pub use util::*;
}

/// Topological checks on exported meshes.
pub mod topology {
    /// Topological characteristics
    pub mod characteristics {
        pub mod euler;
    }
}

/// A prelude module that re-exports commonly used types.
/// This makes it easier to import the most commonly used items from the crate.
pub mod prelude {
    // Re-export from core
    pub use crate::core::{
        delaunay_triangulation::*, half_edge::*, mesh::*, options::*, pslg::*,
        refined_delaunay::*, simplex::*, util::*,
    };

    // Re-export from geometry
    pub use crate::geometry::{
        point::*, predicates::*, quality::*, rectangle::*, triangle::*, util::*,
    };

    pub use crate::topology::characteristics::euler::{
        SimplexCounts, TopologyError, validate_planar_disc,
    };
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================
