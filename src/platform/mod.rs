//! Platform support for the native shell
//!
//! The frame clock is the shell's only platform dependency: it paces the
//! loop to the target rate and reports the measured wall-clock delta. The
//! simulation itself never touches a clock.

use std::time::{Duration, Instant};

/// Ceiling on reported deltas. One debugger pause or laptop sleep must not
/// turn into a huge simulation step.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Paces a loop to a fixed frame interval
#[derive(Debug)]
pub struct FrameClock {
    target: Duration,
    last: Instant,
}

impl FrameClock {
    /// Clock targeting `fps` frames per second
    pub fn new(fps: u32) -> Self {
        Self {
            target: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    /// Sleep out the rest of the current frame interval, then return the
    /// measured delta since the previous tick in seconds, capped at
    /// `MAX_FRAME_DELTA`.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.target {
            std::thread::sleep(self.target - elapsed);
        }
        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32();
        self.last = now;
        dt.min(MAX_FRAME_DELTA)
    }
}
