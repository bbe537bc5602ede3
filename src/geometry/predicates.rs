//! Geometric predicates for planar triangulations.
//!
//! This module contains the floating-point predicates the triangulation
//! algorithms are built on: the half-plane sign test used for point location,
//! the orientation of a triangle and the lifted in-circle determinant used by
//! edge-flip legalization.
//!
//! All predicates are evaluated in plain `f64` arithmetic. Near-degenerate
//! inputs (nearly collinear or nearly cocircular points) may be classified
//! either way.

use crate::geometry::point::Point;

/// Default tolerance used when classifying a point against the edges of a triangle.
pub const CONTAINMENT_EPSILON: f64 = 1e-8;

/// Represents the position of a point relative to a circumcircle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InCircle {
    /// The point is outside the circumcircle
    OUTSIDE,
    /// The point is on the circumcircle (determinant is exactly zero)
    BOUNDARY,
    /// The point is inside the circumcircle
    INSIDE,
}

impl std::fmt::Display for InCircle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OUTSIDE => write!(f, "OUTSIDE"),
            Self::BOUNDARY => write!(f, "BOUNDARY"),
            Self::INSIDE => write!(f, "INSIDE"),
        }
    }
}

/// Represents the orientation of a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Clockwise winding (signed area < 0)
    NEGATIVE,
    /// Collinear vertices (signed area == 0)
    DEGENERATE,
    /// Counter-clockwise winding (signed area > 0)
    POSITIVE,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

/// Signed side of `p1` with respect to the directed line through `p2` and `p3`.
///
/// Computes `(p1.x - p3.x)(p2.y - p3.y) - (p2.x - p3.x)(p1.y - p3.y)`. The
/// sign is what matters: for a counter-clockwise triangle `a, b, c`, a point
/// strictly inside gives a positive value against each of the directed edges
/// `a→b`, `b→c` and `c→a`.
#[must_use]
#[inline]
pub fn half_plane_side(p1: Point, p2: Point, p3: Point) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Twice the signed area of triangle `a, b, c` (positive when counter-clockwise).
#[must_use]
#[inline]
pub fn signed_area2(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Orientation of triangle `a, b, c`.
///
/// # Examples
///
/// ```rust
/// use delaunay_mesh::geometry::point::Point;
/// use delaunay_mesh::geometry::predicates::{Orientation, orientation};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(1.0, 0.0);
/// let c = Point::new(0.0, 1.0);
/// assert_eq!(orientation(a, b, c), Orientation::POSITIVE);
/// assert_eq!(orientation(a, c, b), Orientation::NEGATIVE);
/// ```
#[must_use]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let area = signed_area2(a, b, c);
    if area > 0.0 {
        Orientation::POSITIVE
    } else if area < 0.0 {
        Orientation::NEGATIVE
    } else {
        Orientation::DEGENERATE
    }
}

/// Determinant of the 3×3 matrix given in row-major order.
#[must_use]
#[inline]
#[expect(clippy::too_many_arguments, clippy::many_single_char_names)]
pub fn determinant3(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
    g: f64,
    h: f64,
    i: f64,
) -> f64 {
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

/// Lifted in-circle determinant.
///
/// Evaluates
///
/// ```text
/// | ax  ay  ax²+ay²  1 |
/// | bx  by  bx²+by²  1 |
/// | cx  cy  cx²+cy²  1 |
/// | dx  dy  dx²+dy²  1 |
/// ```
///
/// expanded along its first row into 3×3 minors. For counter-clockwise
/// `a, b, c` the value is positive exactly when `d` lies strictly inside
/// their circumcircle.
///
/// # Examples
///
/// ```rust
/// use delaunay_mesh::geometry::point::Point;
/// use delaunay_mesh::geometry::predicates::in_circle_determinant;
///
/// let a = Point::new(1.0, 0.0);
/// let b = Point::new(0.0, 1.0);
/// let c = Point::new(-1.0, 0.0);
/// assert!(in_circle_determinant(a, b, c, Point::new(0.0, 0.0)) > 0.0);
/// assert!(in_circle_determinant(a, b, c, Point::new(2.0, 2.0)) < 0.0);
/// ```
#[must_use]
pub fn in_circle_determinant(a: Point, b: Point, c: Point, d: Point) -> f64 {
    let la = a.x * a.x + a.y * a.y;
    let lb = b.x * b.x + b.y * b.y;
    let lc = c.x * c.x + c.y * c.y;
    let ld = d.x * d.x + d.y * d.y;

    a.x * determinant3(b.y, lb, 1.0, c.y, lc, 1.0, d.y, ld, 1.0)
        - a.y * determinant3(b.x, lb, 1.0, c.x, lc, 1.0, d.x, ld, 1.0)
        + la * determinant3(b.x, b.y, 1.0, c.x, c.y, 1.0, d.x, d.y, 1.0)
        - determinant3(b.x, b.y, lb, c.x, c.y, lc, d.x, d.y, ld)
}

/// Classifies `d` against the circumcircle of counter-clockwise `a, b, c`.
#[must_use]
pub fn in_circle(a: Point, b: Point, c: Point, d: Point) -> InCircle {
    let det = in_circle_determinant(a, b, c, d);
    if det > 0.0 {
        InCircle::INSIDE
    } else if det < 0.0 {
        InCircle::OUTSIDE
    } else {
        InCircle::BOUNDARY
    }
}

/// Tests whether `p` lies in the closed triangle `a, b, c`, widened by `epsilon`.
///
/// The three half-plane values must agree in sign: all `≤ epsilon` or all
/// `≥ -epsilon`. Either winding of the triangle is accepted. Points on an
/// edge or within `epsilon` of it count as contained.
#[must_use]
pub fn triangle_contains(p: Point, a: Point, b: Point, c: Point, epsilon: f64) -> bool {
    let d1 = half_plane_side(p, a, b);
    let d2 = half_plane_side(p, b, c);
    let d3 = half_plane_side(p, c, a);

    let all_non_positive = d1 <= epsilon && d2 <= epsilon && d3 <= epsilon;
    let all_non_negative = d1 >= -epsilon && d2 >= -epsilon && d3 >= -epsilon;
    all_non_positive || all_non_negative
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_triangle() -> (Point, Point, Point) {
        (
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        )
    }

    #[test]
    fn determinant3_identity_and_known_values() {
        assert_relative_eq!(
            determinant3(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0),
            1.0
        );
        assert_relative_eq!(
            determinant3(2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0),
            6.0
        );
        // Two equal rows
        assert_relative_eq!(
            determinant3(1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0),
            0.0
        );
    }

    #[test]
    fn orientation_classifies_windings() {
        let (a, b, c) = unit_triangle();
        assert_eq!(orientation(a, b, c), Orientation::POSITIVE);
        assert_eq!(orientation(a, c, b), Orientation::NEGATIVE);
        assert_eq!(
            orientation(a, b, Point::new(2.0, 0.0)),
            Orientation::DEGENERATE
        );
        assert_eq!(Orientation::POSITIVE.to_string(), "POSITIVE");
    }

    #[test]
    fn half_plane_side_sign_for_ccw_triangle_interior() {
        let (a, b, c) = unit_triangle();
        let p = Point::new(0.25, 0.25);
        assert!(half_plane_side(p, a, b) > 0.0);
        assert!(half_plane_side(p, b, c) > 0.0);
        assert!(half_plane_side(p, c, a) > 0.0);
        assert!(half_plane_side(p, b, a) < 0.0);
    }

    #[test]
    fn in_circle_unit_circle() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 1.0);
        let c = Point::new(-1.0, 0.0);

        assert_eq!(in_circle(a, b, c, Point::new(0.1, -0.2)), InCircle::INSIDE);
        assert_eq!(in_circle(a, b, c, Point::new(1.5, 1.5)), InCircle::OUTSIDE);
        assert_eq!(in_circle(a, b, c, Point::new(0.0, -1.0)), InCircle::BOUNDARY);
        assert_eq!(InCircle::INSIDE.to_string(), "INSIDE");
    }

    #[test]
    fn in_circle_determinant_changes_sign_with_winding() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 1.0);
        let c = Point::new(-1.0, 0.0);
        let d = Point::new(0.0, 0.0);

        assert!(in_circle_determinant(a, b, c, d) > 0.0);
        assert!(in_circle_determinant(a, c, b, d) < 0.0);
    }

    #[test]
    fn triangle_contains_both_windings_and_tolerance() {
        let (a, b, c) = unit_triangle();

        assert!(triangle_contains(Point::new(0.2, 0.2), a, b, c, CONTAINMENT_EPSILON));
        assert!(triangle_contains(Point::new(0.2, 0.2), a, c, b, CONTAINMENT_EPSILON));
        // On an edge and at a vertex
        assert!(triangle_contains(Point::new(0.5, 0.0), a, b, c, CONTAINMENT_EPSILON));
        assert!(triangle_contains(b, a, b, c, CONTAINMENT_EPSILON));
        // Just outside the hypotenuse but within tolerance
        assert!(triangle_contains(Point::new(0.5, 0.5 + 1e-9), a, b, c, CONTAINMENT_EPSILON));
        assert!(!triangle_contains(Point::new(0.6, 0.6), a, b, c, CONTAINMENT_EPSILON));
        assert!(!triangle_contains(Point::new(-0.1, 0.5), a, b, c, CONTAINMENT_EPSILON));
    }
}
