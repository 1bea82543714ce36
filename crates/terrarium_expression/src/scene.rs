//! Scene composition
//!
//! A [`Scene`] is everything a host needs to draw one frame, in canvas
//! coordinates: background, one disc per body segment (head first), the
//! expression strokes and the mood label. Hosts never look at simulation
//! state directly.

use crate::face::{Expression, Stroke};
use crate::palette::{ColorEase, Rgb, BACKGROUND, LABEL};
use serde::Serialize;
use terrarium_core::{CanvasConfig, Mood, Point, RenderConfig};
use terrarium_limbic::Terrarium;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Disc {
    pub center: Point,
    pub radius: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub position: Point,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Clock time of the tick this scene shows.
    pub at: u64,
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub mood: Mood,
    pub expression: Expression,
    /// Head first.
    pub body: Vec<Disc>,
    pub strokes: Vec<Stroke>,
    pub label: Label,
}

impl Scene {
    pub fn head(&self) -> Option<&Disc> {
        self.body.first()
    }
}

/// Maps simulation state to scenes, frame after frame.
///
/// Stateful only for color easing; with the default smoothing of 1.0 each
/// scene depends on nothing but the current mood and body.
pub struct Presenter {
    ease: ColorEase,
    config: RenderConfig,
}

impl Presenter {
    pub fn new(config: RenderConfig) -> Self {
        tracing::debug!(
            radius = ?config.radius,
            head_pulse = config.head_pulse,
            color_smoothing = config.color_smoothing,
            "presenter ready"
        );
        Self {
            ease: ColorEase::new(Mood::default(), config.color_smoothing),
            config,
        }
    }

    pub fn compose(&mut self, terrarium: &Terrarium, now: u64) -> Scene {
        let mood = terrarium.mood();
        let color = self.ease.step(mood);
        let pulse = if self.config.head_pulse {
            head_pulse(now)
        } else {
            1.0
        };

        let body = terrarium
            .segments()
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                let radius = self.config.radius.radius(segment.size);
                Disc {
                    center: segment.center,
                    radius: if i == 0 { radius * pulse } else { radius },
                    color,
                }
            })
            .collect();

        compose_scene(terrarium.canvas(), now, mood, terrarium.head(), body)
    }
}

fn compose_scene(
    canvas: &CanvasConfig,
    at: u64,
    mood: Mood,
    head: Point,
    body: Vec<Disc>,
) -> Scene {
    let expression = Expression::for_mood(mood);
    Scene {
        at,
        width: canvas.width,
        height: canvas.height,
        background: BACKGROUND,
        mood,
        expression,
        body,
        strokes: expression.strokes(head),
        label: Label {
            text: format!("Mood: {}", mood.name()),
            position: Point::new(10.0, 10.0),
            color: LABEL,
        },
    }
}

/// Breathing scale for the head radius: `1 ± 0.1` with a ~1.26 s period.
pub fn head_pulse(now: u64) -> f32 {
    1.0 + ((now as f64 * 0.005).sin() * 0.1) as f32
}
