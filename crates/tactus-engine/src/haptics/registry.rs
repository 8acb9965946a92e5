use super::{HapticDevice, RegistryError, Shape};

/// Handle to a device in a [`HapticRegistry`].
///
/// Handles are never reused, so a handle to a removed device stays unresolvable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DeviceId(u32);

/// Handle to a shape in a [`HapticRegistry`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ShapeId(u32);

impl DeviceId {
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl ShapeId {
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Application-owned store of devices and shapes.
///
/// Slots are append-only; removal leaves a hole so stale handles fail lookup
/// instead of aliasing a newer entry.
#[derive(Debug, Default)]
pub struct HapticRegistry {
    devices: Vec<Option<HapticDevice>>,
    shapes: Vec<Option<Shape>>,
}

impl HapticRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    // ── devices ───────────────────────────────────────────────────────────

    pub fn add_device(&mut self, device: HapticDevice) -> DeviceId {
        let id = DeviceId(self.devices.len() as u32);
        log::debug!("registered haptic device `{}` as {:?}", device.name(), id);
        self.devices.push(Some(device));
        id
    }

    pub fn device(&self, id: DeviceId) -> Result<&HapticDevice, RegistryError> {
        self.devices
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .ok_or(RegistryError::UnknownDevice(id))
    }

    pub fn device_mut(&mut self, id: DeviceId) -> Result<&mut HapticDevice, RegistryError> {
        self.devices
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(RegistryError::UnknownDevice(id))
    }

    /// Removes a device and detaches every shape that referenced it.
    ///
    /// Detached shapes keep rendering, but no longer as haptic shapes.
    pub fn remove_device(&mut self, id: DeviceId) -> Result<HapticDevice, RegistryError> {
        let device = self
            .devices
            .get_mut(id.0 as usize)
            .and_then(Option::take)
            .ok_or(RegistryError::UnknownDevice(id))?;

        for shape in self.shapes.iter_mut().flatten() {
            if shape.device == Some(id) {
                shape.device = None;
            }
        }

        Ok(device)
    }

    pub fn devices(&self) -> impl Iterator<Item = (DeviceId, &HapticDevice)> {
        self.devices
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.as_ref().map(|d| (DeviceId(i as u32), d)))
    }

    pub fn devices_mut(&mut self) -> impl Iterator<Item = (DeviceId, &mut HapticDevice)> {
        self.devices
            .iter_mut()
            .enumerate()
            .filter_map(|(i, d)| d.as_mut().map(|d| (DeviceId(i as u32), d)))
    }

    // ── shapes ────────────────────────────────────────────────────────────

    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.shapes.len() as u32);
        self.shapes.push(Some(shape));
        id
    }

    pub fn shape(&self, id: ShapeId) -> Result<&Shape, RegistryError> {
        self.shapes
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .ok_or(RegistryError::UnknownShape(id))
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Result<&mut Shape, RegistryError> {
        self.shapes
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(RegistryError::UnknownShape(id))
    }

    pub fn remove_shape(&mut self, id: ShapeId) -> Result<Shape, RegistryError> {
        self.shapes
            .get_mut(id.0 as usize)
            .and_then(Option::take)
            .ok_or(RegistryError::UnknownShape(id))
    }

    /// Attaches `shape` to `device` (or detaches it with `None`).
    pub fn set_shape_device(
        &mut self,
        shape: ShapeId,
        device: Option<DeviceId>,
    ) -> Result<(), RegistryError> {
        if let Some(device) = device {
            self.device(device)?;
        }
        self.shape_mut(shape)?.device = device;
        Ok(())
    }

    /// Resolves the device a shape is haptically rendered for.
    ///
    /// `None` means "not haptic": unknown shape, disabled shape, no device, or a
    /// device that is no longer registered.
    pub fn haptic_device_of(&self, shape: ShapeId) -> Option<DeviceId> {
        let device = self.shape(shape).ok()?.haptic_device()?;
        self.device(device).ok().map(|_| device)
    }
}
