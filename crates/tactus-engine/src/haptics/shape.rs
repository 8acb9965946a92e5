use super::DeviceId;

/// A haptically rendered surface.
///
/// A shape is felt through at most one device. Without a device (or while disabled)
/// it is drawn like any other geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub label: String,
    pub device: Option<DeviceId>,
    pub enabled: bool,
}

impl Shape {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            device: None,
            enabled: true,
        }
    }

    #[inline]
    pub fn with_device(mut self, device: DeviceId) -> Self {
        self.device = Some(device);
        self
    }

    /// Device this shape is currently rendered for, if it is haptic at all.
    #[inline]
    pub fn haptic_device(&self) -> Option<DeviceId> {
        if self.enabled { self.device } else { None }
    }
}
