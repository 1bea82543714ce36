//! Draws scenes onto a ratatui braille canvas.
//!
//! Scenes are y-down with the origin top-left; ratatui canvases are y-up,
//! so every y is flipped against the canvas height.

use anyhow::Result;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line};
use ratatui::Frame;
use terrarium_expression::{Rgb, Scene, Stage};

use crate::tui::Tui;

/// Samples per arc when flattening expression strokes.
const ARC_STEPS: usize = 12;
/// Gap between the concentric rings used to fill a disc.
const FILL_STEP: f64 = 2.0;

pub struct TerminalStage {
    terminal: Tui,
}

impl TerminalStage {
    pub fn new(terminal: Tui) -> Self {
        Self { terminal }
    }
}

impl Stage for TerminalStage {
    fn present(&mut self, scene: &Scene) -> Result<()> {
        self.terminal.draw(|frame| draw(frame, scene))?;
        Ok(())
    }
}

fn color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

pub fn draw(frame: &mut Frame, scene: &Scene) {
    let width = scene.width as f64;
    let height = scene.height as f64;
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(color(scene.background))
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| paint(ctx, scene, height));
    frame.render_widget(canvas, frame.area());
}

fn paint(ctx: &mut Context, scene: &Scene, height: f64) {
    // Tail first so the head ends up on top
    for disc in scene.body.iter().rev() {
        let mut radius = disc.radius as f64;
        while radius > 0.0 {
            ctx.draw(&Circle {
                x: disc.center.x as f64,
                y: height - disc.center.y as f64,
                radius,
                color: color(disc.color),
            });
            radius -= FILL_STEP;
        }
    }
    ctx.layer();

    for stroke in &scene.strokes {
        let points = stroke.polyline(ARC_STEPS);
        for pair in points.windows(2) {
            ctx.draw(&Line {
                x1: pair[0].x as f64,
                y1: height - pair[0].y as f64,
                x2: pair[1].x as f64,
                y2: height - pair[1].y as f64,
                color: color(stroke.color()),
            });
        }
    }

    let label = &scene.label;
    ctx.print(
        label.position.x as f64,
        height - label.position.y as f64,
        TextLine::styled(label.text.clone(), Style::default().fg(color(label.color))),
    );
}
