//! Tactus engine crate.
//!
//! Haptic extension for scene-graph renderers: render bins that feel each haptic
//! shape once per frame and device, the device/shape registry they resolve handles
//! against, and sensors that feed device proxies back into the scene.

pub mod context;
pub mod coords;
pub mod haptics;
pub mod logging;
pub mod render;
pub mod sensor;
pub mod time;

pub use context::HapticContext;
