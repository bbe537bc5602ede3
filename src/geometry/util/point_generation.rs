//! Random and regular point generation.

use crate::geometry::point::Point;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use thiserror::Error;

/// Errors from the point generators.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RandomPointGenerationError {
    /// The coordinate range is empty or not finite.
    #[error("Invalid coordinate range: min {min} must be finite and less than max {max}")]
    InvalidRange {
        /// Lower end of the range
        min: f64,
        /// Upper end of the range
        max: f64,
    },
}

/// Generates `n_points` points with both coordinates drawn uniformly from
/// `[range.0, range.1)`, using a seeded RNG so the result is reproducible.
///
/// # Errors
///
/// Returns [`RandomPointGenerationError::InvalidRange`] if `range.0 >= range.1`
/// or either end is not finite.
///
/// # Examples
///
/// ```rust
/// use delaunay_mesh::geometry::util::generate_random_points_seeded;
///
/// let first = generate_random_points_seeded(100, (-5.0, 5.0), 42).unwrap();
/// let second = generate_random_points_seeded(100, (-5.0, 5.0), 42).unwrap();
/// assert_eq!(first, second);
///
/// let other = generate_random_points_seeded(100, (-5.0, 5.0), 123).unwrap();
/// assert_ne!(first, other);
///
/// assert!(generate_random_points_seeded(10, (1.0, -1.0), 42).is_err());
/// ```
pub fn generate_random_points_seeded(
    n_points: usize,
    range: (f64, f64),
    seed: u64,
) -> Result<Vec<Point>, RandomPointGenerationError> {
    let (min, max) = range;
    if !(min.is_finite() && max.is_finite()) || min >= max {
        return Err(RandomPointGenerationError::InvalidRange { min, max });
    }

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    Ok((0..n_points)
        .map(|_| Point::new(rng.random_range(min..max), rng.random_range(min..max)))
        .collect())
}

/// The `n` corners of a regular polygon inscribed in the circle of `radius`
/// around `center`, counterclockwise from angle zero.
///
/// Corner `k` is `center + radius · (cos(k·2π/n), sin(k·2π/n))`.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "polygon sizes are far below 2^52"
)]
pub fn regular_polygon(n: usize, center: Point, radius: f64) -> Vec<Point> {
    let step = 2.0 * PI / n as f64;
    (0..n)
        .map(|k| {
            let angle = k as f64 * step;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
