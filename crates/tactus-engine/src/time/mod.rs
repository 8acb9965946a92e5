//! Time subsystem.
//!
//! Provides frame numbering and timing without coupling to a viewer loop.
//! Intended usage:
//! - one `FrameClock` per render loop
//! - call `tick()` once per logical frame; every draw pass of that frame
//!   (stereo eyes, extra passes) shares the returned `FrameStamp`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameStamp};
