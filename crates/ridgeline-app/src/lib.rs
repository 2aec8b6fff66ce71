//! Caller-owned frame loop for the sketches.

mod frame_loop;

pub use frame_loop::{FIXED_DT, FrameContext, FrameLoop, LoopControl, MAX_FRAME_TIME};
