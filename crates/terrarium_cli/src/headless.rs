//! Headless host: scripted input on a virtual clock, mood timeline on a
//! writer.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use terrarium_core::{FrameInput, Mood, Point, Senses};
use terrarium_expression::{Expression, Scene, Stage};

/// Holds the pointer still and presses at scheduled times. Quits on the
/// first frame at or past `until_ms`.
pub struct ScriptedSenses {
    pointer: Point,
    clicks: Vec<u64>,
    next_click: usize,
    until_ms: u64,
}

impl ScriptedSenses {
    pub fn new(pointer: Point, mut clicks: Vec<u64>, until_ms: u64) -> Self {
        clicks.sort_unstable();
        Self {
            pointer,
            clicks,
            next_click: 0,
            until_ms,
        }
    }
}

impl Senses for ScriptedSenses {
    fn sense(&mut self, now_ms: u64) -> Result<FrameInput> {
        // A click scheduled between frames lands on the next frame
        let mut presses = 0;
        while self.clicks.get(self.next_click).is_some_and(|&at| at <= now_ms) {
            presses += 1;
            self.next_click += 1;
        }
        Ok(FrameInput {
            pointer: self.pointer,
            presses,
            quit: now_ms >= self.until_ms,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineFormat {
    Text,
    JsonLines,
}

#[derive(Serialize)]
struct TimelineEntry {
    at: u64,
    mood: Mood,
    expression: Expression,
}

/// Writes one line whenever the presented mood differs from the last one,
/// including the very first scene.
pub struct TimelineStage<W: Write> {
    out: W,
    format: TimelineFormat,
    last: Option<Mood>,
}

impl<W: Write> TimelineStage<W> {
    pub fn new(out: W, format: TimelineFormat) -> Self {
        Self {
            out,
            format,
            last: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Stage for TimelineStage<W> {
    fn present(&mut self, scene: &Scene) -> Result<()> {
        if self.last == Some(scene.mood) {
            return Ok(());
        }
        self.last = Some(scene.mood);
        match self.format {
            TimelineFormat::Text => {
                writeln!(self.out, "{:>8}ms  {}", scene.at, scene.label.text)?;
            }
            TimelineFormat::JsonLines => {
                let entry = TimelineEntry {
                    at: scene.at,
                    mood: scene.mood,
                    expression: scene.expression,
                };
                serde_json::to_writer(&mut self.out, &entry)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
