//! Sensors: tracked transforms fed into the scene.
//!
//! A [`Sensor`] produces a matrix each frame (a haptic device's proxy transform,
//! for instance). [`SensorManager`] owns the sensors and updates them together;
//! [`SensorCallback`] copies a sensor's matrix into a [`TransformNode`] once per
//! traversal.

mod callback;
mod device;
mod manager;

use crate::coords::Matrix4;
use crate::haptics::HapticRegistry;

pub use callback::{SensorCallback, TransformNode};
pub use device::DeviceSensor;
pub use manager::{SensorId, SensorManager};

/// Source of a tracked transform.
pub trait Sensor {
    fn name(&self) -> &str;

    /// Refreshes the sensor from its source.
    fn update(&mut self, registry: &mut HapticRegistry) -> anyhow::Result<()>;

    /// Matrix captured by the last successful update.
    fn matrix(&self) -> Matrix4;

    /// Releases the source. Called once, at manager shutdown.
    fn shutdown(&mut self, registry: &mut HapticRegistry) -> anyhow::Result<()> {
        let _ = registry;
        Ok(())
    }
}
