//! Two-dimensional point type.
//!
//! [`Point`] is the coordinate value stored by every structure in the crate:
//! the vertex list of a triangulation, the vertices of a planar straight-line
//! graph and the exported [`Mesh2D`](crate::core::mesh::Mesh2D). Points are
//! plain `Copy` values with the vector arithmetic the triangulation
//! algorithms need (difference, scaling, dot product, normalization).

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Errors raised when a point cannot take part in a triangulation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PointValidationError {
    /// A coordinate is NaN or infinite.
    #[error("Non-finite coordinate in point ({x}, {y})")]
    NonFinite {
        /// The x coordinate as supplied
        x: f64,
        /// The y coordinate as supplied
        y: f64,
    },
}

/// A point (or vector) in the plane.
///
/// # Examples
///
/// ```rust
/// use delaunay_mesh::geometry::point::Point;
///
/// let a = Point::new(1.0, 2.0);
/// let b = Point::new(4.0, 6.0);
/// assert_eq!(a.distance(b), 5.0);
/// assert_eq!(a.midpoint(b), Point::new(2.5, 4.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    #[must_use]
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Returns the coordinates as an array `[x, y]`.
    #[must_use]
    #[inline]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Checks that both coordinates are finite.
    ///
    /// # Errors
    ///
    /// Returns [`PointValidationError::NonFinite`] if either coordinate is NaN or infinite.
    pub fn validate(self) -> Result<(), PointValidationError> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(())
        } else {
            Err(PointValidationError::NonFinite {
                x: self.x,
                y: self.y,
            })
        }
    }

    /// Dot product with `other`.
    #[must_use]
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared Euclidean length.
    #[must_use]
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    #[must_use]
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit vector with the same direction.
    ///
    /// A zero vector has no direction; its normalization is non-finite.
    #[must_use]
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Linear interpolation `self + alpha * (other - self)`.
    #[must_use]
    #[inline]
    pub fn lerp(self, other: Self, alpha: f64) -> Self {
        self + (other - self) * alpha
    }

    /// Midpoint of the segment from `self` to `other`.
    #[must_use]
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, 0.5)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    #[inline]
    fn from(point: Point) -> Self {
        point.to_array()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
