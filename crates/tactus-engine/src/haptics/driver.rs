use crate::coords::{Matrix4, Vec3};

/// One reading from a haptic driver, in device coordinates.
///
/// Positions are normalized to the device's physical range, `[-1, 1]` on each axis.
/// Forces are the forces the driver is currently rendering.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DeviceSample {
    pub position: Vec3,
    pub force: Vec3,
    /// Stylus orientation; translation is ignored.
    pub orientation: Matrix4,
}

/// Low-level driver behind a [`super::HapticDevice`].
///
/// Drivers are not required to be thread-safe. All calls happen on the render thread.
pub trait DeviceDriver {
    /// Human-readable driver name used in logs and errors.
    fn name(&self) -> &str;

    /// Reads the current device state.
    fn sample(&mut self) -> anyhow::Result<DeviceSample>;

    /// Releases the device. Called at most once.
    fn shutdown(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
