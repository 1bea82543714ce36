//! Body Chain Simulator
//!
//! The creature is a fixed chain of [`SEGMENT_COUNT`] discs. The head chases
//! a target with exponential smoothing; each follower chases the segment in
//! front of it. Followers are updated head-to-tail and each one sees the
//! position its predecessor reached *this* frame, which is what gives the
//! body its trailing, springy lag.

use rand::Rng;
use serde::{Deserialize, Serialize};
use terrarium_core::{CanvasConfig, Mood, MotionConfig, Point, SEGMENT_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySegment {
    pub center: Point,
    pub size: u32,
}

/// Random roaming target used while Angry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wander {
    pub target: Point,
    /// Last time `target` was resampled (`last_random_target_at`).
    pub resampled_at: u64,
}

#[derive(Debug, Clone)]
pub struct BodyChain {
    segments: [BodySegment; SEGMENT_COUNT],
    wander: Wander,
    motion: MotionConfig,
    canvas: CanvasConfig,
}

impl BodyChain {
    /// Stack the segments vertically, head at the canvas center and the tail
    /// rising above it. The wander target starts at the center as well.
    pub fn new(motion: MotionConfig, canvas: CanvasConfig, now: u64) -> Self {
        let origin = canvas.center();
        let segments = std::array::from_fn(|i| BodySegment {
            center: Point::new(origin.x, origin.y - i as f32 * motion.segment_spacing),
            size: motion.segment_size,
        });
        Self {
            segments,
            wander: Wander {
                target: origin,
                resampled_at: now,
            },
            motion,
            canvas,
        }
    }

    pub fn segments(&self) -> &[BodySegment; SEGMENT_COUNT] {
        &self.segments
    }

    pub fn head(&self) -> Point {
        self.segments[0].center
    }

    pub fn wander(&self) -> &Wander {
        &self.wander
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn motion(&self) -> &MotionConfig {
        &self.motion
    }

    /// Where the head is heading this frame. While Angry the wander target is
    /// resampled once more than `wander_interval_ms` has passed.
    pub fn head_target<R: Rng + ?Sized>(
        &mut self,
        mood: Mood,
        pointer: Point,
        now: u64,
        rng: &mut R,
    ) -> Point {
        if mood != Mood::Angry {
            return pointer;
        }
        if now.saturating_sub(self.wander.resampled_at) > self.motion.wander_interval_ms {
            let x = rng.gen_range(0..=self.canvas.width);
            let y = rng.gen_range(0..=self.canvas.height);
            self.wander = Wander {
                target: Point::new(x as f32, y as f32),
                resampled_at: now,
            };
            tracing::debug!(x, y, now, "wander target resampled");
        }
        self.wander.target
    }

    /// Advance every segment by one frame.
    pub fn step<R: Rng + ?Sized>(&mut self, mood: Mood, pointer: Point, now: u64, rng: &mut R) {
        let target = self.head_target(mood, pointer, now, rng);
        let k_head = match mood {
            Mood::Angry => self.motion.angry_head_smoothing,
            Mood::Bored | Mood::Content | Mood::Playful | Mood::Sad => self.motion.head_smoothing,
        };
        self.segments[0].center.approach(target, k_head);
        self.follow();
    }

    /// Pull each follower toward its (already updated) predecessor.
    fn follow(&mut self) {
        let k = self.motion.follow_smoothing;
        for i in 1..SEGMENT_COUNT {
            let leader = self.segments[i - 1].center;
            self.segments[i].center.approach(leader, k);
        }
    }
}
