//! Ruppert-style Delaunay refinement.
//!
//! [`RefinedDelaunay`] owns a [`Delaunay`] triangulation of a planar
//! straight-line graph's vertices together with a working copy of the graph.
//! [`refine`](RefinedDelaunay::refine) inserts Steiner points until no
//! triangle has an angle below the requested bound:
//!
//! 1. Every segment whose diametral circle (shrunk by a small slack) holds a
//!    graph vertex is split at its midpoint.
//! 2. The triangle with the smallest angle is found; if it meets the bound,
//!    refinement is done.
//! 3. If that triangle's circumcenter lies in some segment's diametral
//!    circle, every such segment is split instead.
//! 4. Otherwise the circumcenter is inserted.
//!
//! Split midpoints become graph vertices; circumcenters do not. Termination
//! is guaranteed for bounds up to about 20.7° and is usual up to about 30°.
//! Above that the loop may run forever unless
//! [`RefinementOptions::max_iterations`] is set.
//!
//! # Examples
//!
//! ```rust
//! use delaunay_mesh::core::pslg::PlanarStraightLineGraph;
//! use delaunay_mesh::core::refined_delaunay::RefinedDelaunay;
//! use delaunay_mesh::geometry::point::Point;
//!
//! let mut graph = PlanarStraightLineGraph::new();
//! graph
//!     .add_closed_line_segments(&[
//!         Point::new(0.0, 0.0),
//!         Point::new(4.0, 0.0),
//!         Point::new(4.0, 1.0),
//!         Point::new(0.0, 1.0),
//!     ])
//!     .unwrap();
//!
//! let mut refined = RefinedDelaunay::new(graph).unwrap();
//! refined.refine(25.0).unwrap();
//!
//! let (_, angle) = refined.smallest_angle().unwrap();
//! assert!(angle.to_degrees() >= 25.0);
//! ```
//!
//! # References
//!
//! - Ruppert, J. "A Delaunay Refinement Algorithm for Quality 2-Dimensional
//!   Mesh Generation" *Journal of Algorithms* 18.3 (1995): 548-585
//! - Shewchuk, J.R. "Delaunay refinement algorithms for triangular mesh
//!   generation" *Computational Geometry* 22.1-3 (2002): 21-74

use crate::core::delaunay_triangulation::{
    Delaunay, InsertionError, TriangulationConstructionError,
};
use crate::core::mesh::Mesh2D;
use crate::core::options::{RefinementOptions, TriangulationOptions};
use crate::core::pslg::{PlanarStraightLineGraph, PslgError};
use crate::geometry::point::Point;
use crate::geometry::triangle::Triangle;
use std::f64::consts::PI;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Fewest graph vertices that can be refined.
pub const MIN_GRAPH_VERTICES: usize = 3;

/// Errors raised by refinement.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RefinementError {
    /// The graph has too few vertices to form a triangle.
    #[error("A graph needs at least {MIN_GRAPH_VERTICES} vertices to be refined, got {found}")]
    TooFewVertices {
        /// Number of vertices in the graph
        found: usize,
    },

    /// Building the initial triangulation failed.
    #[error("Construction error: {0}")]
    Construction(#[from] TriangulationConstructionError),

    /// The angle bound is NaN or infinite.
    #[error("Minimum angle must be finite, got {degrees}")]
    InvalidAngle {
        /// The requested bound in degrees
        degrees: f64,
    },

    /// Inserting a Steiner point failed.
    #[error("Insertion error: {0}")]
    Insertion(#[from] InsertionError),

    /// Editing the constraint graph failed.
    #[error("Graph error: {0}")]
    Graph(#[from] PslgError),

    /// The configured iteration cap was reached.
    #[error(
        "Refinement stopped after {iterations} iterations with smallest angle {smallest_angle_degrees}°"
    )]
    IterationLimit {
        /// Iterations completed
        iterations: usize,
        /// Smallest angle at the time refinement stopped
        smallest_angle_degrees: f64,
    },
}

/// Counters describing a refinement run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefinementStatistics {
    /// Rounds of the refinement loop, including the final check
    pub iterations: usize,
    /// Segment midpoints inserted
    pub segment_splits: usize,
    /// Circumcenters inserted
    pub circumcenter_insertions: usize,
    /// Edge flips performed by all insertions
    pub flips: usize,
}

/// What can encroach on a segment during a splitting pass.
#[derive(Clone, Copy, Debug)]
enum Encroacher {
    /// Any vertex of the constraint graph
    GraphVertices,
    /// A candidate Steiner point
    Candidate(Point),
}

/// A Delaunay triangulation constrained by, and refined against, a PSLG.
#[derive(Clone, Debug)]
pub struct RefinedDelaunay {
    triangulation: Delaunay,
    graph: PlanarStraightLineGraph,
    options: RefinementOptions,
}

impl RefinedDelaunay {
    /// Triangulates the vertices of `graph` with default options.
    ///
    /// # Errors
    ///
    /// Returns [`RefinementError::TooFewVertices`] for graphs with fewer than
    /// three vertices and [`RefinementError::Construction`] if a vertex
    /// cannot be inserted.
    pub fn new(graph: PlanarStraightLineGraph) -> Result<Self, RefinementError> {
        Self::with_options(
            graph,
            TriangulationOptions::default(),
            RefinementOptions::default(),
        )
    }

    /// Triangulates the vertices of `graph`, in graph order.
    ///
    /// # Errors
    ///
    /// See [`RefinedDelaunay::new`].
    pub fn with_options(
        graph: PlanarStraightLineGraph,
        triangulation_options: TriangulationOptions,
        options: RefinementOptions,
    ) -> Result<Self, RefinementError> {
        if graph.vertex_count() < MIN_GRAPH_VERTICES {
            return Err(RefinementError::TooFewVertices {
                found: graph.vertex_count(),
            });
        }
        let triangulation = Delaunay::with_options(graph.vertices(), triangulation_options)?;
        Ok(Self {
            triangulation,
            graph,
            options,
        })
    }

    /// Inserts a point into the triangulation without adding it to the graph.
    ///
    /// # Errors
    ///
    /// See [`Delaunay::insert`].
    pub fn insert(&mut self, point: Point) -> Result<usize, InsertionError> {
        self.triangulation.insert(point)
    }

    /// Inserts Steiner points until every triangle's smallest angle is at
    /// least `min_angle_degrees`.
    ///
    /// # Errors
    ///
    /// Returns [`RefinementError::InvalidAngle`] for a non-finite bound,
    /// [`RefinementError::IterationLimit`] if
    /// [`RefinementOptions::max_iterations`] is exceeded, and
    /// [`RefinementError::Insertion`] if a Steiner point cannot be inserted.
    pub fn refine(
        &mut self,
        min_angle_degrees: f64,
    ) -> Result<RefinementStatistics, RefinementError> {
        if !min_angle_degrees.is_finite() {
            return Err(RefinementError::InvalidAngle {
                degrees: min_angle_degrees,
            });
        }
        let bound = min_angle_degrees * PI / 180.0;
        let mut stats = RefinementStatistics::default();

        loop {
            stats.iterations += 1;
            if let Some(limit) = self.options.max_iterations
                && stats.iterations > limit
            {
                let smallest_angle_degrees = self
                    .smallest_angle()
                    .map_or(f64::NAN, |(_, angle)| angle.to_degrees());
                warn!(
                    iterations = limit,
                    smallest_angle_degrees, "refinement iteration limit reached"
                );
                return Err(RefinementError::IterationLimit {
                    iterations: limit,
                    smallest_angle_degrees,
                });
            }

            self.split_encroached_segments(Encroacher::GraphVertices, &mut stats)?;

            let Some((triangle, angle)) = self.triangulation.smallest_angle() else {
                break;
            };
            if angle >= bound {
                break;
            }

            let circumcenter = triangle.circumcenter();
            let splits =
                self.split_encroached_segments(Encroacher::Candidate(circumcenter), &mut stats)?;
            if splits == 0 {
                let inserted = self.triangulation.insert_with_statistics(circumcenter)?;
                stats.circumcenter_insertions += 1;
                stats.flips += inserted.flips;
            }
            trace!(
                iteration = stats.iterations,
                smallest_angle_degrees = angle.to_degrees(),
                segment_splits = splits,
                "refinement round"
            );
        }

        debug!(
            min_angle_degrees,
            iterations = stats.iterations,
            segment_splits = stats.segment_splits,
            circumcenter_insertions = stats.circumcenter_insertions,
            vertices = self.triangulation.number_of_vertices(),
            triangles = self.triangulation.number_of_triangles(),
            "refinement finished"
        );
        Ok(stats)
    }

    /// Splits every segment encroached by `encroacher`, returning how many splits happened.
    ///
    /// After a split the same index is examined again (it now holds a
    /// different segment); the two new halves are appended and examined
    /// later in the same pass.
    fn split_encroached_segments(
        &mut self,
        encroacher: Encroacher,
        stats: &mut RefinementStatistics,
    ) -> Result<usize, RefinementError> {
        let mut splits = 0;
        let mut index = 0;
        while index < self.graph.line_segments().len() {
            let (start, _) = self.graph.segment_endpoints(index)?;
            let midpoint = self.graph.split_point(index, 0.5)?;
            let radius = start.distance(midpoint) - self.options.encroachment_shrink;

            let encroached = match encroacher {
                Encroacher::GraphVertices => self.graph.any_vertex_within_range(midpoint, radius),
                Encroacher::Candidate(point) => point.distance(midpoint) < radius,
            };
            if encroached {
                let inserted = self.triangulation.insert_with_statistics(midpoint)?;
                self.graph.split_line_segment_at_midpoint(index)?;
                splits += 1;
                stats.segment_splits += 1;
                stats.flips += inserted.flips;
            } else {
                index += 1;
            }
        }
        Ok(splits)
    }

    /// Exports the current mesh; see [`Delaunay::to_mesh`].
    #[must_use]
    pub fn to_mesh(&self) -> Mesh2D {
        self.triangulation.to_mesh()
    }

    /// The interior triangle with the smallest angle, and that angle in radians.
    #[must_use]
    pub fn smallest_angle(&self) -> Option<(Triangle, f64)> {
        self.triangulation.smallest_angle()
    }

    /// The interior triangle with the smallest angle.
    #[must_use]
    pub fn smallest_angle_triangle(&self) -> Option<Triangle> {
        self.triangulation.smallest_angle_triangle()
    }

    /// The working copy of the constraint graph, including split midpoints.
    #[must_use]
    pub const fn graph(&self) -> &PlanarStraightLineGraph {
        &self.graph
    }

    /// The underlying triangulation.
    #[must_use]
    pub const fn triangulation(&self) -> &Delaunay {
        &self.triangulation
    }

    /// Options used by [`refine`](Self::refine).
    #[must_use]
    pub const fn options(&self) -> &RefinementOptions {
        &self.options
    }
}
