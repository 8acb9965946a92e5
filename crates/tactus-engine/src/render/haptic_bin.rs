use super::{BinContents, DedupTable, DrawBin, DrawnLeaf, HapticLeafRenderer, RenderInfo};

/// Running counters for a [`HapticRenderBin`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct BinStats {
    /// Draw calls that ran the full pass.
    pub frames_drawn: u64,
    /// Draw calls dropped because the frame was already drawn (stereo, extra passes).
    pub frames_skipped: u64,
    pub leaves_forwarded: u64,
    pub leaves_suppressed: u64,
}

/// Render bin that draws each haptic `(device, shape)` pair at most once per frame.
///
/// Two guards:
/// - the bin itself runs at most once per frame number; later calls in the same frame
///   return immediately
/// - within a pass, every leaf goes through [`HapticLeafRenderer`], which drops leaves
///   whose pair was already rendered
///
/// Child bins draw themselves and are not deduplicated by this bin.
#[derive(Default)]
pub struct HapticRenderBin {
    contents: BinContents,
    rendered: DedupTable,
    last_frame: Option<u64>,
    stats: BinStats,
}

impl HapticRenderBin {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contents(&self) -> &BinContents {
        &self.contents
    }

    #[inline]
    pub fn contents_mut(&mut self) -> &mut BinContents {
        &mut self.contents
    }

    /// Frame number of the last pass that ran, if any.
    #[inline]
    pub fn last_frame(&self) -> Option<u64> {
        self.last_frame
    }

    /// Pairs rendered during the last pass.
    #[inline]
    pub fn rendered(&self) -> &DedupTable {
        &self.rendered
    }

    #[inline]
    pub fn stats(&self) -> BinStats {
        self.stats
    }
}

impl From<BinContents> for HapticRenderBin {
    fn from(contents: BinContents) -> Self {
        Self {
            contents,
            ..Self::default()
        }
    }
}

impl DrawBin for HapticRenderBin {
    fn draw(&mut self, info: &mut RenderInfo<'_>, previous: &mut Option<DrawnLeaf>) {
        let frame = info.state().frame_stamp().frame_number;

        if self.last_frame == Some(frame) {
            self.stats.frames_skipped += 1;
            log::trace!("haptic bin: frame {frame} already drawn, skipping pass");
            return;
        }
        self.last_frame = Some(frame);

        let Self { contents, rendered, stats, .. } = self;
        rendered.reset();

        let before = *stats;
        contents.draw_with(info, previous, |leaf, info, prev| {
            let forwarded = HapticLeafRenderer::new(rendered).render(leaf, info, prev);
            if forwarded {
                stats.leaves_forwarded += 1;
            } else {
                stats.leaves_suppressed += 1;
            }
            forwarded
        });
        stats.frames_drawn += 1;

        log::trace!(
            "haptic bin: frame {frame} drew {} leaves, suppressed {}",
            stats.leaves_forwarded - before.leaves_forwarded,
            stats.leaves_suppressed - before.leaves_suppressed,
        );
    }
}
