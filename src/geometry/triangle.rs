//! Geometric triangle value type.
//!
//! A [`Triangle`] is three points held by value. It is what the
//! triangulation hands out when a caller asks for a concrete triangle (for
//! example the worst-shaped one during refinement), and it answers the
//! geometric questions refinement needs: containment, interior angles and
//! circumcenter.

use crate::geometry::point::Point;
use crate::geometry::predicates::{CONTAINMENT_EPSILON, signed_area2, triangle_contains};
use crate::geometry::rectangle::Rectangle;
use std::f64::consts::PI;

/// A triangle given by its three corner points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triangle {
    /// First corner
    pub a: Point,
    /// Second corner
    pub b: Point,
    /// Third corner
    pub c: Point,
}

impl Triangle {
    /// Creates a triangle from three corners.
    #[must_use]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// The corners as an array, in order.
    #[must_use]
    pub const fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Builds a triangle strictly enclosing every point in `points`.
    ///
    /// The bounding box of the points is widened by `dilate` on every side;
    /// with `s = width + height` of the widened box the triangle is
    /// `(left, bottom)`, `(left + s, bottom)`, `(left, bottom + s)`, a
    /// counter-clockwise right triangle whose hypotenuse clears the box's
    /// top-right corner. Returns `None` for an empty point set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delaunay_mesh::geometry::point::Point;
    /// use delaunay_mesh::geometry::triangle::Triangle;
    ///
    /// let points = [Point::new(0.0, 0.0), Point::new(2.0, 1.0)];
    /// let enclosing = Triangle::containing(&points, 1.0).unwrap();
    /// assert!(points.iter().all(|&p| enclosing.contains(p)));
    /// ```
    #[must_use]
    pub fn containing(points: &[Point], dilate: f64) -> Option<Self> {
        let bounds = Rectangle::bounding_box(points, dilate)?;
        let span = bounds.width() + bounds.height();
        Some(Self::new(
            Point::new(bounds.left, bounds.bottom),
            Point::new(bounds.left + span, bounds.bottom),
            Point::new(bounds.left, bounds.bottom + span),
        ))
    }

    /// Tests containment with the default tolerance `1e-8`.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.contains_with_tolerance(point, CONTAINMENT_EPSILON)
    }

    /// Tests containment in the closed triangle widened by `epsilon`.
    #[must_use]
    pub fn contains_with_tolerance(&self, point: Point, epsilon: f64) -> bool {
        triangle_contains(point, self.a, self.b, self.c, epsilon)
    }

    /// Interior angles in radians at `a`, `b` and `c`.
    ///
    /// The angles at `a` and `b` come from dot products of normalized edge
    /// directions (clamped to `[-1, 1]` before `acos`); the angle at `c` is
    /// `π` minus the other two.
    #[must_use]
    pub fn angles(&self) -> [f64; 3] {
        let ab = (self.b - self.a).normalized();
        let ac = (self.c - self.a).normalized();
        let at_a = ab.dot(ac).clamp(-1.0, 1.0).acos();

        let bc = (self.c - self.b).normalized();
        let at_b = (-ab).dot(bc).clamp(-1.0, 1.0).acos();

        [at_a, at_b, PI - at_a - at_b]
    }

    /// Smallest interior angle in radians.
    #[must_use]
    pub fn smallest_angle(&self) -> f64 {
        let [x, y, z] = self.angles();
        x.min(y).min(z)
    }

    /// Largest interior angle in radians.
    #[must_use]
    pub fn largest_angle(&self) -> f64 {
        let [x, y, z] = self.angles();
        x.max(y).max(z)
    }

    /// Center of the circle through the three corners.
    ///
    /// Collinear corners have no circumcircle; the result is then non-finite.
    #[must_use]
    pub fn circumcenter(&self) -> Point {
        let Self { a, b, c } = *self;
        let la = a.x * a.x + a.y * a.y;
        let lb = b.x * b.x + b.y * b.y;
        let lc = c.x * c.x + c.y * c.y;

        let x = (la * (b.y - c.y) + lb * (c.y - a.y) + lc * (a.y - b.y))
            / (2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)));
        let y = (la * (b.x - c.x) + lb * (c.x - a.x) + lc * (a.x - b.x))
            / (2.0 * (a.y * (b.x - c.x) + b.y * (c.x - a.x) + c.y * (a.x - b.x)));
        Point::new(x, y)
    }

    /// Radius of the circumcircle.
    #[must_use]
    pub fn circumradius(&self) -> f64 {
        self.circumcenter().distance(self.a)
    }

    /// Unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        0.5 * signed_area2(self.a, self.b, self.c).abs()
    }

    /// Length of the shortest side.
    #[must_use]
    pub fn shortest_edge(&self) -> f64 {
        self.a
            .distance(self.b)
            .min(self.b.distance(self.c))
            .min(self.c.distance(self.a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn angles_of_right_isosceles_triangle() {
        let t = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        );
        let [a, b, c] = t.angles();
        assert_relative_eq!(a, PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(b, PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(c, PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(t.smallest_angle(), PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(t.largest_angle(), PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn angles_sum_to_pi_and_are_winding_independent() {
        let t = Triangle::new(
            Point::new(-0.3, 0.2),
            Point::new(2.5, -1.0),
            Point::new(0.7, 3.1),
        );
        let r = Triangle::new(t.a, t.c, t.b);
        let [x, y, z] = t.angles();
        assert_relative_eq!(x + y + z, PI, epsilon = 1e-12);
        assert_relative_eq!(t.smallest_angle(), r.smallest_angle(), epsilon = 1e-12);
    }

    #[test]
    fn equilateral_angles() {
        let h = 3.0_f64.sqrt() / 2.0;
        let t = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.5, h),
        );
        for angle in t.angles() {
            assert_relative_eq!(angle.to_degrees(), 60.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn circumcenter_of_right_triangle_is_hypotenuse_midpoint() {
        let t = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 2.0),
        );
        let cc = t.circumcenter();
        assert_relative_eq!(cc.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(cc.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(t.circumradius(), 5.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn circumcenter_is_equidistant() {
        let t = Triangle::new(
            Point::new(0.13, -0.2),
            Point::new(-0.04, 0.34),
            Point::new(-0.38, 0.3),
        );
        let cc = t.circumcenter();
        assert_abs_diff_eq!(cc.distance(t.a), cc.distance(t.b), epsilon = 1e-12);
        assert_abs_diff_eq!(cc.distance(t.a), cc.distance(t.c), epsilon = 1e-12);
    }

    #[test]
    fn containing_triangle_encloses_points() {
        let points = [
            Point::new(-5.0, 2.0),
            Point::new(3.0, 7.5),
            Point::new(10.0, -4.0),
        ];
        let t = Triangle::containing(&points, 1e5).unwrap();
        for p in points {
            assert!(t.contains(p));
            assert!(t.contains_with_tolerance(p, 0.0));
        }
        assert!(signed_area2(t.a, t.b, t.c) > 0.0);
        assert!(Triangle::containing(&[], 1e5).is_none());
    }

    #[test]
    fn area_and_shortest_edge() {
        let t = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 4.0),
        );
        assert_relative_eq!(t.area(), 6.0);
        assert_relative_eq!(t.shortest_edge(), 3.0);
    }
}
