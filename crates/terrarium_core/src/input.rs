//! Per-frame input records handed from the host to the simulation.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Everything the host observed since the previous tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Current pointer position in canvas coordinates.
    pub pointer: Point,
    /// Number of presses seen since the previous tick. Each one is stamped
    /// with the tick's clock sample.
    pub presses: u32,
    /// Close/quit requested. The current tick still completes.
    pub quit: bool,
}

impl FrameInput {
    pub fn at(pointer: Point) -> Self {
        Self {
            pointer,
            ..Default::default()
        }
    }

    pub fn with_presses(mut self, presses: u32) -> Self {
        self.presses = presses;
        self
    }
}

/// One pointer observation. Overwritten each frame; the previous one is kept
/// to derive speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub position: Point,
    pub timestamp: u64,
}

/// Rapid-click counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickBurst {
    pub count: u32,
    pub last_click_at: Option<u64>,
}

impl ClickBurst {
    /// Register a press at `at`. A press less than `window_ms` after the
    /// previous one extends the burst; any longer pause starts a new one.
    pub fn register(&mut self, at: u64, window_ms: u64) {
        let rapid = self
            .last_click_at
            .is_some_and(|last| at.saturating_sub(last) < window_ms);
        self.count = if rapid { self.count + 1 } else { 1 };
        self.last_click_at = Some(at);
    }

    /// Whether the most recent press happened less than `within_ms` ago.
    pub fn clicked_within(&self, now: u64, within_ms: u64) -> bool {
        self.last_click_at
            .is_some_and(|last| now.saturating_sub(last) < within_ms)
    }

    pub fn clear(&mut self) {
        self.count = 0;
    }
}
