use std::collections::{HashMap, HashSet};

use crate::haptics::{DeviceId, ShapeId};

/// Shapes already rendered this frame, per device.
///
/// A shape felt through two devices is rendered once for each of them.
/// Per-device sets are cleared in place on [`reset`](Self::reset), so a warmed table
/// stops allocating.
#[derive(Debug, Default)]
pub struct DedupTable {
    rendered: HashMap<DeviceId, HashSet<ShapeId>>,
}

impl DedupTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets everything rendered so far. Keeps allocated capacity.
    pub fn reset(&mut self) {
        for shapes in self.rendered.values_mut() {
            shapes.clear();
        }
    }

    /// Returns `true` if `(device, shape)` should be rendered now, and records it.
    ///
    /// Without a device the shape is not haptic and always renders.
    pub fn should_render(&mut self, device: Option<DeviceId>, shape: ShapeId) -> bool {
        let Some(device) = device else { return true };
        self.rendered.entry(device).or_default().insert(shape)
    }

    /// Whether `(device, shape)` was recorded since the last reset.
    pub fn contains(&self, device: DeviceId, shape: ShapeId) -> bool {
        self.rendered.get(&device).is_some_and(|s| s.contains(&shape))
    }

    /// Number of recorded pairs.
    pub fn len(&self) -> usize {
        self.rendered.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.values().all(HashSet::is_empty)
    }

    /// Shapes recorded for `device`, in no particular order.
    pub fn rendered(&self, device: DeviceId) -> impl Iterator<Item = ShapeId> + '_ {
        self.rendered.get(&device).into_iter().flatten().copied()
    }
}
