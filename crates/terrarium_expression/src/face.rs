//! Facial expression glyphs drawn relative to the head center.
//!
//! Offsets are in canvas pixels with y pointing down. Arc angles follow the
//! usual counter-clockwise convention as seen on screen, so an arc over
//! `0..π` bulges upward and one over `π..2π` bulges downward.

use crate::palette::{Rgb, ACCENT, INK};
use serde::Serialize;
use std::f32::consts::PI;
use terrarium_core::{Mood, Point};

/// Radius shared by every mouth arc.
const MOUTH_RADIUS: f32 = 5.0;
/// Half width of the flat mouth and brow lines.
const HALF_WIDTH: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    /// Flat line just under the head center.
    Flat,
    /// Upper semicircle below the center.
    Smile,
    /// Lower semicircle on the center with a red accent under it.
    Grin,
    /// Lower semicircle pushed further down.
    Frown,
    /// Two flat lines around the center.
    Scowl,
}

impl Expression {
    pub fn for_mood(mood: Mood) -> Self {
        match mood {
            Mood::Bored => Expression::Flat,
            Mood::Content => Expression::Smile,
            Mood::Playful => Expression::Grin,
            Mood::Sad => Expression::Frown,
            Mood::Angry => Expression::Scowl,
        }
    }

    /// Strokes for this expression with the head at `head`.
    pub fn strokes(self, head: Point) -> Vec<Stroke> {
        let Point { x, y } = head;
        let flat = |dy: f32| Stroke::Line {
            from: Point::new(x - HALF_WIDTH, y + dy),
            to: Point::new(x + HALF_WIDTH, y + dy),
            color: INK,
        };
        let arc = |dy: f32, start: f32, end: f32| Stroke::Arc {
            center: Point::new(x, y + dy),
            radius: MOUTH_RADIUS,
            start,
            end,
            color: INK,
        };

        match self {
            Expression::Flat => vec![flat(5.0)],
            Expression::Smile => vec![arc(5.0, 0.0, PI)],
            Expression::Grin => vec![
                arc(0.0, PI, 2.0 * PI),
                Stroke::Line {
                    from: Point::new(x, y + 10.0),
                    to: Point::new(x, y + 15.0),
                    color: ACCENT,
                },
            ],
            Expression::Frown => vec![arc(10.0, PI, 2.0 * PI)],
            Expression::Scowl => vec![flat(-5.0), flat(5.0)],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stroke {
    Line {
        from: Point,
        to: Point,
        color: Rgb,
    },
    Arc {
        center: Point,
        radius: f32,
        start: f32,
        end: f32,
        color: Rgb,
    },
}

impl Stroke {
    pub fn color(&self) -> Rgb {
        match self {
            Stroke::Line { color, .. } | Stroke::Arc { color, .. } => *color,
        }
    }

    /// Approximate the stroke as connected points. Lines yield their two
    /// endpoints; arcs yield `steps + 1` samples from `start` to `end`.
    pub fn polyline(&self, steps: usize) -> Vec<Point> {
        match *self {
            Stroke::Line { from, to, .. } => vec![from, to],
            Stroke::Arc {
                center,
                radius,
                start,
                end,
                ..
            } => {
                let steps = steps.max(1);
                (0..=steps)
                    .map(|i| {
                        let theta = start + (end - start) * i as f32 / steps as f32;
                        Point::new(
                            center.x + radius * theta.cos(),
                            center.y - radius * theta.sin(),
                        )
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(&b) < 1e-4
    }

    #[test]
    fn test_expression_per_mood() {
        assert_eq!(Expression::for_mood(Mood::Bored), Expression::Flat);
        assert_eq!(Expression::for_mood(Mood::Angry), Expression::Scowl);
        let distinct: std::collections::HashSet<_> =
            Mood::ALL.iter().map(|m| Expression::for_mood(*m)).collect();
        assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn test_bored_line_under_center() {
        let strokes = Expression::Flat.strokes(Point::new(100.0, 100.0));
        assert_eq!(
            strokes,
            vec![Stroke::Line {
                from: Point::new(95.0, 105.0),
                to: Point::new(105.0, 105.0),
                color: INK,
            }]
        );
    }

    #[test]
    fn test_smile_bulges_upward() {
        let strokes = Expression::Smile.strokes(Point::new(100.0, 100.0));
        let points = strokes[0].polyline(8);
        assert_eq!(points.len(), 9);
        assert!(close(points[0], Point::new(105.0, 105.0)));
        assert!(close(points[4], Point::new(100.0, 100.0)));
        assert!(close(points[8], Point::new(95.0, 105.0)));
    }

    #[test]
    fn test_grin_has_red_accent() {
        let strokes = Expression::Grin.strokes(Point::new(0.0, 0.0));
        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[1].color(), ACCENT);
        // Lowest arc point sits one radius below the center
        let lowest = strokes[0].polyline(2)[1];
        assert!(close(lowest, Point::new(0.0, 5.0)));
    }

    #[test]
    fn test_frown_is_lower_than_grin() {
        let head = Point::new(50.0, 50.0);
        let frown = Expression::Frown.strokes(head)[0].polyline(2)[1];
        assert!(close(frown, Point::new(50.0, 65.0)));
    }

    #[test]
    fn test_scowl_brackets_center() {
        let strokes = Expression::Scowl.strokes(Point::new(10.0, 20.0));
        let ys: Vec<f32> = strokes
            .iter()
            .map(|s| s.polyline(1)[0].y)
            .collect();
        assert_eq!(ys, vec![15.0, 25.0]);
    }
}
