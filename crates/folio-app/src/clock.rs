//! Fixed-step frame clock.
//!
//! The page is stepped at a fixed 60 Hz no matter how often the display
//! presents, so a scrubbed timeline converges the same way on every machine.

use tracing::warn;

/// Fixed step: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame the clock will account for (4 FPS). Anything slower is
/// clamped and the session runs slow instead of bursting steps.
pub const MAX_FRAME_TIME: f64 = 0.25;

#[derive(Debug, Default)]
pub struct FrameClock {
    accumulator: f64,
    elapsed: f64,
    frame_count: u64,
    step_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one presented frame of `frame_time` seconds, calling
    /// `step(FIXED_DT)` for every whole step that fits. Returns the number of
    /// steps taken.
    pub fn advance(&mut self, frame_time: f64, mut step: impl FnMut(f64)) -> u32 {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;
        let mut steps = 0;
        while self.accumulator >= FIXED_DT {
            step(FIXED_DT);
            self.elapsed += FIXED_DT;
            self.accumulator -= FIXED_DT;
            steps += 1;
        }
        self.step_count += u64::from(steps);
        self.frame_count += 1;
        steps
    }

    /// Fraction of a step left in the accumulator, in `[0, 1)`.
    pub fn alpha(&self) -> f64 {
        self.accumulator / FIXED_DT
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Simulated seconds stepped so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
