use super::{DedupTable, DrawnLeaf, RenderInfo, RenderLeaf};

/// Wraps a leaf's draw call with the per-frame dedup check.
///
/// Built per leaf; it borrows the bin's table and carries nothing across calls.
pub struct HapticLeafRenderer<'t> {
    rendered: &'t mut DedupTable,
}

impl<'t> HapticLeafRenderer<'t> {
    #[inline]
    pub fn new(rendered: &'t mut DedupTable) -> Self {
        Self { rendered }
    }

    /// Renders `leaf` unless its `(device, shape)` pair was already rendered this frame.
    ///
    /// Returns whether the leaf was forwarded. A suppressed leaf applies no state.
    pub fn render(
        &mut self,
        leaf: &dyn RenderLeaf,
        info: &mut RenderInfo<'_>,
        previous: Option<DrawnLeaf>,
    ) -> bool {
        if let Some(shape) = leaf.shape() {
            let device = info.registry().haptic_device_of(shape);
            if !self.rendered.should_render(device, shape) {
                return false;
            }
        }

        leaf.render(info, previous);
        true
    }
}
