use thiserror::Error;

use super::{DeviceId, ShapeId};

/// Error returned by registry lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The handle never existed or its device was removed.
    #[error("unknown haptic device {0:?}")]
    UnknownDevice(DeviceId),
    /// The handle never existed or its shape was removed.
    #[error("unknown haptic shape {0:?}")]
    UnknownShape(ShapeId),
}

/// Error returned by device operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    #[error("haptic device `{0}` has been shut down")]
    ShutDown(String),
    #[error("invalid workspace for `{name}`: min must not exceed max")]
    InvalidWorkspace { name: String },
}
