//! The frame loop shared by the terminal and headless hosts.

use anyhow::Result;
use terrarium_core::{Clock, Mood, Senses};
use terrarium_expression::{Presenter, Stage};
use terrarium_limbic::{FramePacer, Terrarium};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub mood: Mood,
    pub ended_at: u64,
}

/// Run frames until the senses report quit. The quitting frame is still
/// simulated and presented.
pub fn run<S, G, C>(
    terrarium: &mut Terrarium,
    presenter: &mut Presenter,
    senses: &mut S,
    stage: &mut G,
    clock: &mut C,
    pacer: &FramePacer,
) -> Result<RunSummary>
where
    S: Senses,
    G: Stage,
    C: Clock,
{
    loop {
        let now = clock.now_ms();
        let input = senses.sense(now)?;
        let report = terrarium.tick(&input, now);
        if report.mood_changed() {
            info!(
                at = now,
                from = %report.previous_mood,
                to = %report.mood,
                speed = report.speed,
                "mood changed"
            );
        }

        let scene = presenter.compose(terrarium, now);
        stage.present(&scene)?;

        if input.quit {
            let summary = RunSummary {
                ticks: terrarium.ticks(),
                mood: terrarium.mood(),
                ended_at: now,
            };
            info!(ticks = summary.ticks, mood = %summary.mood, "frame loop finished");
            return Ok(summary);
        }
        clock.wait_until(pacer.next_deadline(now));
    }
}
