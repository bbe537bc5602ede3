//! Axis-aligned rectangles.

use crate::geometry::point::Point;

/// An axis-aligned rectangle described by its four sides.
///
/// No ordering between opposite sides is enforced, so `width` and `height`
/// may be negative for an inverted rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle {
    /// Smallest x
    pub left: f64,
    /// Largest x
    pub right: f64,
    /// Smallest y
    pub bottom: f64,
    /// Largest y
    pub top: f64,
}

impl Rectangle {
    /// Creates a rectangle from its sides.
    #[must_use]
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// `right - left`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// `top - bottom`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Tightest rectangle around `points`, widened by `dilate` on every side.
    ///
    /// Returns `None` when `points` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delaunay_mesh::geometry::point::Point;
    /// use delaunay_mesh::geometry::rectangle::Rectangle;
    ///
    /// let points = [Point::new(1.0, 2.0), Point::new(-1.0, 5.0)];
    /// let bounds = Rectangle::bounding_box(&points, 0.5).unwrap();
    /// assert_eq!(bounds, Rectangle::new(-1.5, 1.5, 1.5, 5.5));
    /// ```
    #[must_use]
    pub fn bounding_box(points: &[Point], dilate: f64) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(
            first.x - dilate,
            first.x + dilate,
            first.y - dilate,
            first.y + dilate,
        );
        for p in rest {
            bounds.left = bounds.left.min(p.x - dilate);
            bounds.right = bounds.right.max(p.x + dilate);
            bounds.bottom = bounds.bottom.min(p.y - dilate);
            bounds.top = bounds.top.max(p.y + dilate);
        }
        Some(bounds)
    }
}
