//! Input Sampler - turns raw host input into per-frame signals.

use terrarium_core::{ClickBurst, Point, PointerSample};

/// Tracks the previous pointer sample and the running click burst.
#[derive(Debug, Clone)]
pub struct InputSampler {
    previous: Option<PointerSample>,
    speed: f32,
    burst: ClickBurst,
    burst_window_ms: u64,
}

impl InputSampler {
    pub fn new(burst_window_ms: u64) -> Self {
        Self {
            previous: None,
            speed: 0.0,
            burst: ClickBurst::default(),
            burst_window_ms,
        }
    }

    /// Sample the pointer for this frame and return its speed (px/frame).
    ///
    /// The stored previous sample is replaced on every call, whatever mood
    /// the creature ends up in. The very first sample has speed 0.
    pub fn sample(&mut self, position: Point, now: u64) -> f32 {
        self.speed = self
            .previous
            .map(|prev| prev.position.distance(&position))
            .unwrap_or(0.0);
        self.previous = Some(PointerSample {
            position,
            timestamp: now,
        });
        self.speed
    }

    pub fn register_press(&mut self, at: u64) {
        self.burst.register(at, self.burst_window_ms);
        tracing::trace!(count = self.burst.count, at, "press registered");
    }

    /// Speed computed by the latest [`sample`](Self::sample).
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn previous(&self) -> Option<PointerSample> {
        self.previous
    }

    pub fn burst(&self) -> &ClickBurst {
        &self.burst
    }

    /// The mood machine resets the burst when it fires a rage transition.
    pub fn burst_mut(&mut self) -> &mut ClickBurst {
        &mut self.burst
    }
}
