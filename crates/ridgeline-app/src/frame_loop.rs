//! Fixed-timestep frame loop with an explicit stop condition.
//!
//! The loop is owned and driven by the caller: [`FrameLoop::run`] measures
//! wall-clock time and invokes the tick function at a fixed simulation rate
//! until it returns [`LoopControl::Stop`], and [`FrameLoop::step`] does the
//! same for one explicitly timed frame, which keeps scripted demos and tests
//! deterministic. There is no self-rescheduling callback anywhere.

use std::time::Instant;

use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Maximum frame time accepted per step. Longer frames are clamped so a
/// stall produces slowdown instead of a catch-up burst of ticks.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Whether the loop keeps going after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    /// Schedule further ticks.
    Continue,
    /// Leave the loop after the current frame.
    Stop,
}

/// What a tick function gets to see: timing for the current simulation step.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext {
    /// Simulation timestep for this tick, always [`FIXED_DT`].
    pub dt: f64,
    /// Total simulated time before this tick, seconds.
    pub sim_time: f64,
    /// Ticks executed before this one.
    pub tick_index: u64,
}

/// Accumulator-based fixed-timestep loop state.
#[derive(Debug)]
pub struct FrameLoop {
    accumulator: f64,
    sim_time: f64,
    tick_count: u64,
    frame_count: u64,
}

impl FrameLoop {
    /// A fresh loop with no accumulated time.
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            sim_time: 0.0,
            tick_count: 0,
            frame_count: 0,
        }
    }

    /// Advance one frame of `frame_time` seconds, running zero or more fixed
    /// ticks.
    ///
    /// Returns [`LoopControl::Stop`] as soon as any tick asks to stop;
    /// remaining accumulated time is kept but not simulated.
    pub fn step(
        &mut self,
        frame_time: f64,
        tick: &mut impl FnMut(&FrameContext) -> LoopControl,
    ) -> LoopControl {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                frame_ms = frame_time * 1000.0,
                clamp_ms = MAX_FRAME_TIME * 1000.0,
                "frame time clamped"
            );
            frame_time = MAX_FRAME_TIME;
        }
        self.accumulator += frame_time;
        self.frame_count += 1;

        while self.accumulator >= FIXED_DT {
            self.accumulator -= FIXED_DT;
            let ctx = FrameContext {
                dt: FIXED_DT,
                sim_time: self.sim_time,
                tick_index: self.tick_count,
            };
            self.sim_time += FIXED_DT;
            self.tick_count += 1;
            if tick(&ctx) == LoopControl::Stop {
                return LoopControl::Stop;
            }
        }
        LoopControl::Continue
    }

    /// Drive the loop off the wall clock until a tick returns
    /// [`LoopControl::Stop`].
    pub fn run(&mut self, mut tick: impl FnMut(&FrameContext) -> LoopControl) {
        let mut previous = Instant::now();
        loop {
            let now = Instant::now();
            let frame_time = now.duration_since(previous).as_secs_f64();
            previous = now;
            if self.step(frame_time, &mut tick) == LoopControl::Stop {
                return;
            }
        }
    }

    /// Total fixed ticks executed.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Total frames stepped.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total simulated time, seconds.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
