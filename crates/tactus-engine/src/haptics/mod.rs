//! Haptic devices and shapes.
//!
//! Devices and shapes live in an application-owned [`HapticRegistry`] and are
//! addressed through copyable handles ([`DeviceId`], [`ShapeId`]). Render bins and
//! sensors only ever hold handles; nothing outside the registry owns a device or
//! a shape.

mod device;
mod driver;
mod error;
mod registry;
mod shape;

pub use device::{HapticDevice, WorkspaceMode};
pub use driver::{DeviceDriver, DeviceSample};
pub use error::{DeviceError, RegistryError};
pub use registry::{DeviceId, HapticRegistry, ShapeId};
pub use shape::Shape;
