//! Tunable tolerances for triangulation and refinement.
//!
//! The defaults suit coordinates of order one to a few thousand; the builders
//! exist for callers that work at very different coordinate scales.
//!
//! ```rust
//! use delaunay_mesh::core::options::{RefinementOptionsBuilder, TriangulationOptions};
//!
//! let defaults = TriangulationOptions::default();
//! assert_eq!(defaults.containment_epsilon, 1e-8);
//!
//! let capped = RefinementOptionsBuilder::default()
//!     .max_iterations(500)
//!     .build()
//!     .unwrap();
//! assert_eq!(capped.max_iterations, Some(500));
//! assert_eq!(capped.encroachment_shrink, 1e-3);
//! ```

use crate::geometry::predicates::CONTAINMENT_EPSILON;

/// Margin added around the input's bounding box before the enclosing triangle is built.
pub const SUPER_TRIANGLE_DILATION: f64 = 1e5;

/// Amount subtracted from a segment's half-length when testing encroachment.
pub const ENCROACHMENT_SHRINK: f64 = 1e-3;

/// Options for [`Delaunay`](crate::core::delaunay_triangulation::Delaunay).
#[derive(Builder, Clone, Copy, Debug, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct TriangulationOptions {
    /// Slack for the half-plane tests during point location
    #[builder(default = "CONTAINMENT_EPSILON")]
    pub containment_epsilon: f64,
    /// Margin around the input bounding box for the enclosing triangle
    #[builder(default = "SUPER_TRIANGLE_DILATION")]
    pub super_triangle_dilation: f64,
}

impl Default for TriangulationOptions {
    fn default() -> Self {
        Self {
            containment_epsilon: CONTAINMENT_EPSILON,
            super_triangle_dilation: SUPER_TRIANGLE_DILATION,
        }
    }
}

impl TriangulationOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(epsilon) = self.containment_epsilon
            && !(epsilon.is_finite() && epsilon >= 0.0)
        {
            return Err(format!(
                "containment_epsilon must be finite and non-negative, got {epsilon}"
            ));
        }
        if let Some(dilation) = self.super_triangle_dilation
            && !(dilation.is_finite() && dilation > 0.0)
        {
            return Err(format!(
                "super_triangle_dilation must be finite and positive, got {dilation}"
            ));
        }
        Ok(())
    }
}

/// Options for [`RefinedDelaunay::refine`](crate::core::refined_delaunay::RefinedDelaunay::refine).
#[derive(Builder, Clone, Copy, Debug, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct RefinementOptions {
    /// Subtracted from a segment's half-length to get its encroachment radius
    #[builder(default = "ENCROACHMENT_SHRINK")]
    pub encroachment_shrink: f64,
    /// Upper bound on refinement rounds; `None` runs until the angle target is met
    #[builder(setter(strip_option), default)]
    pub max_iterations: Option<usize>,
}

impl Default for RefinementOptions {
    fn default() -> Self {
        Self {
            encroachment_shrink: ENCROACHMENT_SHRINK,
            max_iterations: None,
        }
    }
}

impl RefinementOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(shrink) = self.encroachment_shrink
            && !(shrink.is_finite() && shrink >= 0.0)
        {
            return Err(format!(
                "encroachment_shrink must be finite and non-negative, got {shrink}"
            ));
        }
        if let Some(Some(0)) = self.max_iterations {
            return Err("max_iterations must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Ready-made refinement configurations.
pub mod config_presets {
    use super::{ENCROACHMENT_SHRINK, RefinementOptions};

    /// Unbounded refinement with the default tolerances.
    #[must_use]
    pub const fn unbounded() -> RefinementOptions {
        RefinementOptions {
            encroachment_shrink: ENCROACHMENT_SHRINK,
            max_iterations: None,
        }
    }

    /// Default tolerances, giving up after `max_iterations` rounds.
    ///
    /// Useful for angle targets well above 20.7°, where refinement is not
    /// guaranteed to terminate.
    #[must_use]
    pub const fn bounded(max_iterations: usize) -> RefinementOptions {
        RefinementOptions {
            encroachment_shrink: ENCROACHMENT_SHRINK,
            max_iterations: Some(max_iterations),
        }
    }
}
