use anyhow::Context;

use crate::coords::Matrix4;
use crate::haptics::{DeviceId, HapticRegistry};

use super::Sensor;

/// Tracks the proxy transform of one haptic device.
#[derive(Debug, Clone)]
pub struct DeviceSensor {
    name: String,
    device: DeviceId,
    matrix: Matrix4,
}

impl DeviceSensor {
    pub fn new(device: DeviceId) -> Self {
        Self {
            name: format!("device-sensor-{}", device.index()),
            device,
            matrix: Matrix4::identity(),
        }
    }

    #[inline]
    pub fn device(&self) -> DeviceId {
        self.device
    }
}

impl Sensor for DeviceSensor {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self, registry: &mut HapticRegistry) -> anyhow::Result<()> {
        let device = registry.device_mut(self.device)?;
        device
            .update()
            .with_context(|| format!("sensor `{}` could not update", self.name))?;
        self.matrix = device.proxy_transform();
        Ok(())
    }

    fn matrix(&self) -> Matrix4 {
        self.matrix
    }

    fn shutdown(&mut self, registry: &mut HapticRegistry) -> anyhow::Result<()> {
        // The device may already be gone; nothing left to release then.
        match registry.device_mut(self.device) {
            Ok(device) => device.shutdown(),
            Err(_) => Ok(()),
        }
    }
}
