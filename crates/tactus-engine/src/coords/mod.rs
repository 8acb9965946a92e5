//! Coordinate and geometry types shared by the haptic and sensor layers.
//!
//! Canonical space follows the host scene graph:
//! - right-handed world coordinates
//! - row-vector matrices (points are transformed as `p * M`)
//! - translation stored in the last row

mod bounds;
mod matrix;
mod vec3;

pub use bounds::BoundingBox;
pub use matrix::Matrix4;
pub use vec3::Vec3;
