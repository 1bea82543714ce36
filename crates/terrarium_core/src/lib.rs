pub mod clock;
pub mod config;
pub mod geometry;
pub mod input;
pub mod mood;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{
    CanvasConfig, ConfigError, MoodThresholds, MotionConfig, RadiusMode, RenderConfig,
    SimulationConfig, TerrariumConfig,
};
pub use geometry::Point;
pub use input::{ClickBurst, FrameInput, PointerSample};
pub use mood::Mood;

/// Number of body segments, head included. Fixed for the process lifetime.
pub const SEGMENT_COUNT: usize = 15;

/// The host side that turns raw window/terminal events into one frame of input.
///
/// Called exactly once per tick with the tick's clock sample.
pub trait Senses {
    fn sense(&mut self, now_ms: u64) -> anyhow::Result<FrameInput>;
}
