//! Frame pacing for the render loop
//!
//! The pacer only decides *when* the next tick is due; the clock decides how
//! to get there (sleeping for a wall clock, jumping for a virtual one).

use std::time::Duration;

/// Configuration for the frame loop cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    /// Time budget of one frame (default: 16ms, ~60 Hz)
    pub interval: Duration,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::from_fps(60)
    }
}

impl FramePacer {
    /// Pacer for a target frame rate. Zero is treated as one frame per second.
    pub fn from_fps(fps: u32) -> Self {
        Self {
            interval: Duration::from_millis(1000 / u64::from(fps.max(1))),
        }
    }

    /// Fast pacing for high-refresh displays
    pub fn fast() -> Self {
        Self::from_fps(120)
    }

    /// Slow pacing for constrained terminals (e.g. over SSH)
    pub fn slow() -> Self {
        Self::from_fps(20)
    }

    pub fn interval_ms(&self) -> u64 {
        (self.interval.as_millis() as u64).max(1)
    }

    /// When the frame that started at `frame_started_at` should hand over to
    /// the next one.
    pub fn next_deadline(&self, frame_started_at: u64) -> u64 {
        frame_started_at + self.interval_ms()
    }
}
