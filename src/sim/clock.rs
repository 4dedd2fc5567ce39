//! Wall-clock to simulation-time conversion
//!
//! External frame ticks arrive with a millisecond timestamp; the clock turns
//! them into a frame-rate independent scale factor for per-frame velocities.

use serde::{Deserialize, Serialize};

use crate::consts::BASELINE_FPS;

/// One sampled frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    /// Raw wall-clock delta, milliseconds. Feeds the particle pool, whose
    /// lifetimes and velocities are in milliseconds.
    pub delta_ms: f32,
    /// Scale factor for per-frame velocities: 1.0 at the baseline frame
    /// rate, 0.5 at twice the rate.
    pub dt: f32,
}

/// Tracks the previous frame timestamp.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next frame timestamp (milliseconds, monotonic). The first
    /// sample after construction or [`reset`](Self::reset) reports a zero
    /// delta so nothing jumps on the opening frame.
    pub fn sample(&mut self, now_ms: f64) -> FrameSample {
        let delta_ms = match self.last_timestamp {
            None => 0.0,
            Some(last) => (now_ms - last) as f32,
        };
        self.last_timestamp = Some(now_ms);
        FrameSample {
            delta_ms,
            dt: BASELINE_FPS * delta_ms / 1000.0,
        }
    }

    pub fn reset(&mut self) {
        self.last_timestamp = None;
    }
}
