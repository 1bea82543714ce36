//! Mood colors
//!
//! The mapping itself is a fixed table. [`ColorEase`] optionally softens
//! mood changes by blending the displayed color toward the table color a
//! little every frame instead of snapping.

use serde::{Deserialize, Serialize};
use terrarium_core::Mood;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Terrarium backdrop.
pub const BACKGROUND: Rgb = Rgb(0, 50, 50);
/// Facial features.
pub const INK: Rgb = Rgb(0, 0, 0);
/// Playful tongue.
pub const ACCENT: Rgb = Rgb(255, 0, 0);
/// Mood label text.
pub const LABEL: Rgb = Rgb(255, 255, 255);

pub fn mood_color(mood: Mood) -> Rgb {
    match mood {
        Mood::Bored => Rgb(100, 100, 100),
        Mood::Content => Rgb(255, 200, 100),
        Mood::Playful => Rgb(50, 255, 50),
        Mood::Sad => Rgb(70, 70, 150),
        Mood::Angry => Rgb(255, 50, 50),
    }
}

/// Displayed body color, eased toward the current mood color.
#[derive(Debug, Clone)]
pub struct ColorEase {
    current: [f32; 3],
    smoothing: f32,
}

impl ColorEase {
    /// `smoothing` is the fraction of the gap closed per frame, clamped to
    /// (0, 1]. At 1.0 the color snaps to the mood color immediately.
    pub fn new(initial: Mood, smoothing: f32) -> Self {
        let Rgb(r, g, b) = mood_color(initial);
        Self {
            current: [r as f32, g as f32, b as f32],
            smoothing: smoothing.clamp(f32::EPSILON, 1.0),
        }
    }

    pub fn step(&mut self, mood: Mood) -> Rgb {
        let Rgb(r, g, b) = mood_color(mood);
        for (channel, target) in self.current.iter_mut().zip([r, g, b]) {
            *channel += (target as f32 - *channel) * self.smoothing;
        }
        self.current()
    }

    pub fn current(&self) -> Rgb {
        let [r, g, b] = self.current.map(|c| c.round().clamp(0.0, 255.0) as u8);
        Rgb(r, g, b)
    }
}
