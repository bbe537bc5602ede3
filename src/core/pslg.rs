//! Planar straight-line graphs.
//!
//! A [`PlanarStraightLineGraph`] is the constraint input of quality
//! refinement: a vertex list plus segments between vertices that must
//! survive, possibly subdivided, as edges of the final mesh. Refinement
//! subdivides segments with [`split_line_segment`](PlanarStraightLineGraph::split_line_segment),
//! so the segment list is reordered over time; only the set of segments is
//! meaningful.

use crate::core::simplex::LineElement;
use crate::geometry::point::Point;
use thiserror::Error;

/// Errors raised by PSLG edits.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PslgError {
    /// A polyline needs at least two vertices.
    #[error("A polyline must have at least two vertices, got {found}")]
    TooFewVertices {
        /// Number of vertices supplied
        found: usize,
    },
    /// A segment index is past the end of the segment list.
    #[error("Segment index {index} is out of range for {count} segments")]
    SegmentOutOfRange {
        /// The requested index
        index: usize,
        /// Number of segments
        count: usize,
    },
}

/// Vertices and constraint segments.
///
/// # Examples
///
/// ```rust
/// use delaunay_mesh::core::pslg::PlanarStraightLineGraph;
/// use delaunay_mesh::geometry::point::Point;
///
/// let mut graph = PlanarStraightLineGraph::new();
/// graph
///     .add_closed_line_segments(&[
///         Point::new(0.0, 0.0),
///         Point::new(1.0, 0.0),
///         Point::new(0.0, 1.0),
///     ])
///     .unwrap();
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.line_segments().len(), 3);
///
/// let midpoint = graph.split_line_segment_at_midpoint(0).unwrap();
/// assert_eq!(midpoint, 3);
/// assert_eq!(graph.vertices()[3], Point::new(0.5, 0.0));
/// assert_eq!(graph.line_segments().len(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanarStraightLineGraph {
    vertices: Vec<Point>,
    segments: Vec<LineElement>,
}

impl PlanarStraightLineGraph {
    /// Creates an empty graph.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// All vertices, in insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// All segments.
    #[must_use]
    pub fn line_segments(&self) -> &[LineElement] {
        &self.segments
    }

    /// Endpoint coordinates of segment `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PslgError::SegmentOutOfRange`] for an unknown segment.
    pub fn segment_endpoints(&self, index: usize) -> Result<(Point, Point), PslgError> {
        let segment = self.segment(index)?;
        Ok((self.vertices[segment.i], self.vertices[segment.j]))
    }

    fn segment(&self, index: usize) -> Result<LineElement, PslgError> {
        self.segments
            .get(index)
            .copied()
            .ok_or(PslgError::SegmentOutOfRange {
                index,
                count: self.segments.len(),
            })
    }

    /// Adds two new vertices and the segment between them.
    pub fn add_line_segment(&mut self, start: Point, end: Point) {
        let first = self.vertices.len();
        self.vertices.extend([start, end]);
        self.segments.push(LineElement::new(first, first + 1));
    }

    /// Adds an open polyline through `vertices`.
    ///
    /// # Errors
    ///
    /// Returns [`PslgError::TooFewVertices`] for fewer than two vertices; the
    /// graph is unchanged.
    pub fn add_line_segments(&mut self, vertices: &[Point]) -> Result<(), PslgError> {
        self.add_polyline(vertices, false)
    }

    /// Adds a closed polygon through `vertices`, including the closing
    /// segment from the last vertex back to the first.
    ///
    /// # Errors
    ///
    /// Returns [`PslgError::TooFewVertices`] for fewer than two vertices; the
    /// graph is unchanged.
    pub fn add_closed_line_segments(&mut self, vertices: &[Point]) -> Result<(), PslgError> {
        self.add_polyline(vertices, true)
    }

    fn add_polyline(&mut self, vertices: &[Point], closed: bool) -> Result<(), PslgError> {
        if vertices.len() < 2 {
            return Err(PslgError::TooFewVertices {
                found: vertices.len(),
            });
        }
        let first = self.vertices.len();
        let last = first + vertices.len() - 1;
        self.vertices.extend_from_slice(vertices);
        self.segments
            .extend((first..last).map(|i| LineElement::new(i, i + 1)));
        if closed {
            self.segments.push(LineElement::new(last, first));
        }
        Ok(())
    }

    /// Removes segment `index`; its vertices stay.
    ///
    /// # Errors
    ///
    /// Returns [`PslgError::SegmentOutOfRange`] for an unknown segment.
    pub fn remove_line_segment(&mut self, index: usize) -> Result<LineElement, PslgError> {
        self.segment(index)?;
        Ok(self.segments.remove(index))
    }

    /// The point at parameter `alpha` along segment `index`, without changing the graph.
    ///
    /// # Errors
    ///
    /// Returns [`PslgError::SegmentOutOfRange`] for an unknown segment.
    pub fn split_point(&self, index: usize, alpha: f64) -> Result<Point, PslgError> {
        let (start, end) = self.segment_endpoints(index)?;
        Ok(start.lerp(end, alpha))
    }

    /// Replaces segment `index` by two segments meeting at the point at
    /// parameter `alpha` along it.
    ///
    /// The new vertex is appended, segment `index` is removed, and the
    /// halves `start → new` and `new → end` are appended in that order.
    /// Returns the index of the new vertex.
    ///
    /// # Errors
    ///
    /// Returns [`PslgError::SegmentOutOfRange`] for an unknown segment; the
    /// graph is unchanged.
    pub fn split_line_segment(&mut self, index: usize, alpha: f64) -> Result<usize, PslgError> {
        let point = self.split_point(index, alpha)?;
        let LineElement { i, j } = self.segments.remove(index);
        let new_vertex = self.vertices.len();
        self.vertices.push(point);
        self.segments.push(LineElement::new(i, new_vertex));
        self.segments.push(LineElement::new(new_vertex, j));
        Ok(new_vertex)
    }

    /// [`split_line_segment`](Self::split_line_segment) at `alpha = 0.5`.
    ///
    /// # Errors
    ///
    /// Returns [`PslgError::SegmentOutOfRange`] for an unknown segment.
    pub fn split_line_segment_at_midpoint(&mut self, index: usize) -> Result<usize, PslgError> {
        self.split_line_segment(index, 0.5)
    }

    /// Whether some vertex lies strictly closer than `range` to `point`.
    #[must_use]
    pub fn any_vertex_within_range(&self, point: Point, range: f64) -> bool {
        self.vertices.iter().any(|v| v.distance(point) < range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle_graph() -> PlanarStraightLineGraph {
        let mut graph = PlanarStraightLineGraph::new();
        graph
            .add_closed_line_segments(&[
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(0.0, 3.0),
            ])
            .unwrap();
        graph
    }

    #[test]
    fn add_line_segment_appends_two_vertices() {
        let mut graph = PlanarStraightLineGraph::new();
        graph.add_line_segment(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        graph.add_line_segment(Point::new(2.0, 0.0), Point::new(3.0, 1.0));
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(
            graph.line_segments(),
            &[LineElement::new(0, 1), LineElement::new(2, 3)]
        );
    }

    #[test]
    fn open_and_closed_polylines() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 2.0),
        ];
        let mut open = PlanarStraightLineGraph::new();
        open.add_line_segments(&points).unwrap();
        assert_eq!(open.line_segments().len(), 3);
        assert_eq!(open.line_segments()[2], LineElement::new(2, 3));

        let mut closed = PlanarStraightLineGraph::new();
        closed.add_line_segment(Point::new(5.0, 5.0), Point::new(6.0, 5.0));
        closed.add_closed_line_segments(&points).unwrap();
        assert_eq!(closed.vertex_count(), 6);
        assert_eq!(closed.line_segments().len(), 5);
        assert_eq!(closed.line_segments()[4], LineElement::new(5, 2));
    }

    #[test]
    fn short_polylines_are_rejected() {
        let mut graph = PlanarStraightLineGraph::new();
        assert_eq!(
            graph.add_line_segments(&[Point::new(0.0, 0.0)]),
            Err(PslgError::TooFewVertices { found: 1 })
        );
        assert_eq!(
            graph.add_closed_line_segments(&[]),
            Err(PslgError::TooFewVertices { found: 0 })
        );
        assert_eq!(graph, PlanarStraightLineGraph::new());
    }

    #[test]
    fn split_replaces_segment_with_halves() {
        let mut graph = triangle_graph();
        let new_vertex = graph.split_line_segment(0, 0.25).unwrap();

        assert_eq!(new_vertex, 3);
        assert_eq!(graph.vertices()[3], Point::new(1.0, 0.0));
        assert_eq!(
            graph.line_segments(),
            &[
                LineElement::new(1, 2),
                LineElement::new(2, 0),
                LineElement::new(0, 3),
                LineElement::new(3, 1),
            ]
        );
    }

    #[test]
    fn split_point_does_not_mutate() {
        let graph = triangle_graph();
        let p = graph.split_point(1, 0.5).unwrap();
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, 1.5);
        assert_eq!(graph, triangle_graph());
    }

    #[test]
    fn out_of_range_segments() {
        let mut graph = triangle_graph();
        let expected = PslgError::SegmentOutOfRange { index: 3, count: 3 };
        assert_eq!(graph.split_line_segment_at_midpoint(3), Err(expected.clone()));
        assert_eq!(graph.remove_line_segment(3), Err(expected.clone()));
        assert_eq!(graph.segment_endpoints(3), Err(expected));
        assert_eq!(graph, triangle_graph());
    }

    #[test]
    fn remove_line_segment_keeps_vertices() {
        let mut graph = triangle_graph();
        let removed = graph.remove_line_segment(1).unwrap();
        assert_eq!(removed, LineElement::new(1, 2));
        assert_eq!(graph.line_segments().len(), 2);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn vertex_range_query_is_strict() {
        let graph = triangle_graph();
        assert!(graph.any_vertex_within_range(Point::new(0.5, 0.0), 0.6));
        assert!(!graph.any_vertex_within_range(Point::new(0.5, 0.0), 0.5));
        assert!(!graph.any_vertex_within_range(Point::new(2.0, 1.0), 0.1));
    }
}
