//! Render-bin layer.
//!
//! The host's cull traversal produces leaves and nested bins; bins draw them in a
//! fixed order (pre-bins, fine-grained leaves, state graphs, post-bins).
//! [`HapticRenderBin`] adds the haptic guarantees on top:
//! - at most one pass per frame number
//! - at most one draw per `(device, shape)` pair per pass
//!
//! Convention:
//! - leaves carry their haptic shape explicitly; bins never inspect render state for it
//! - bins hold registry handles only, resolved through [`RenderInfo::registry`]

mod bin;
mod contents;
mod decorator;
mod dedup;
mod haptic_bin;
mod leaf;
mod order;
mod state;

pub use bin::{DrawBin, RenderBin};
pub use contents::BinContents;
pub use decorator::HapticLeafRenderer;
pub use dedup::DedupTable;
pub use haptic_bin::{BinStats, HapticRenderBin};
pub use leaf::{Drawable, DrawnLeaf, Leaf, LeafId, RenderLeaf, StateGraph};
pub use order::{BinKey, BinNumber};
pub use state::{RenderInfo, State, StateSet};
