//! # Terrarium Limbic System
//!
//! Everything that happens inside the creature between reading the pointer
//! and handing a pose to the renderer. One call to [`Terrarium::tick`] runs,
//! in this order:
//!
//! 1. [`InputSampler`]: pointer speed and click bursts
//! 2. [`MoodMachine`]: selects exactly one [`Mood`](terrarium_core::Mood)
//! 3. [`BodyChain`]: moves the head toward its target and drags the
//!    followers along behind it
//!
//! All timers compare against the single clock sample passed to `tick`.
//!
//! ## Time Scales
//!
//! - Frame (≈16 ms): pointer speed, segment smoothing
//! - Sub-second: click bursts, playful debounce
//! - Seconds: anger cool-down, boredom, sadness, neglect

mod body;
mod machine;
mod pacer;
mod sampler;
mod system;

pub use body::{BodyChain, BodySegment, Wander};
pub use machine::{MoodMachine, MoodTimers};
pub use pacer::FramePacer;
pub use sampler::InputSampler;
pub use system::{Terrarium, TickReport};
