//! Point and mesh generators.
//!
//! These build inputs for tests, benchmarks and quick experiments: seeded
//! random point clouds, regular polygons, and ready-made circular and
//! rectangular meshes.

pub mod mesh_generation;
pub mod point_generation;

pub use mesh_generation::*;
pub use point_generation::*;
