//! terrarium_bench: trajectory tests for the creature over long sessions.
//!
//! Validates behavior that only shows up over many frames:
//! - Long neglect (the anger cycle never settles)
//! - Continuous play (never bored, never sad)
//! - Chain lag (the tail trails the head through every turn)
//! - Wandering while angry (targets stay on the canvas)

use rand::rngs::StdRng;
use rand::SeedableRng;
use terrarium_core::{FrameInput, Mood, Point, TerrariumConfig};
use terrarium_limbic::Terrarium;

pub const FRAME_MS: u64 = 16;

/// A seeded terrarium with default tuning, created at t=0.
pub fn terrarium(seed: u64) -> Terrarium {
    Terrarium::with_rng(&TerrariumConfig::default(), 0, StdRng::seed_from_u64(seed))
}

/// Simulate `total_ms` at the default frame cadence, with the pointer at
/// `path(now)` on every frame. Returns the mood after each tick.
pub fn simulate<F>(terrarium: &mut Terrarium, total_ms: u64, mut path: F) -> Vec<(u64, Mood)>
where
    F: FnMut(u64) -> Point,
{
    (0..=total_ms / FRAME_MS)
        .map(|i| {
            let now = i * FRAME_MS;
            let report = terrarium.tick(&FrameInput::at(path(now)), now);
            (now, report.mood)
        })
        .collect()
}

/// Collapse a per-tick mood log into its runs: `(entered_at, mood)`.
pub fn transitions(log: &[(u64, Mood)]) -> Vec<(u64, Mood)> {
    let mut runs: Vec<(u64, Mood)> = Vec::new();
    for &(now, mood) in log {
        if runs.last().map(|&(_, m)| m) != Some(mood) {
            runs.push((now, mood));
        }
    }
    runs
}

/// Pointer circling the canvas center.
pub fn circle(radius: f32, rad_per_ms: f32) -> impl Fn(u64) -> Point {
    move |now| {
        let theta = now as f32 * rad_per_ms;
        Point::new(400.0 + radius * theta.cos(), 300.0 + radius * theta.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One minute of a motionless pointer: bored, sad, then an anger cycle
    /// that only ever cools for a single frame before re-igniting.
    #[test]
    fn test_long_neglect_cycles_anger() {
        let mut t = terrarium(1);
        let log = simulate(&mut t, 60_000, |_| Point::new(400.0, 300.0));
        let runs = transitions(&log);

        assert_eq!(runs[0], (0, Mood::Bored));
        assert_eq!(runs[1], (10_016, Mood::Sad));
        assert_eq!(runs[2], (15_008, Mood::Angry));
        assert_eq!(runs[3], (18_016, Mood::Content));
        assert_eq!(runs[4], (18_032, Mood::Angry));

        for pair in runs[2..].windows(2) {
            match (pair[0].1, pair[1].1) {
                (Mood::Angry, Mood::Content) => {
                    assert!(pair[1].0 - pair[0].0 > 3000, "cooled too early: {:?}", pair)
                }
                (Mood::Content, Mood::Angry) => assert_eq!(pair[1].0 - pair[0].0, FRAME_MS),
                other => panic!("unexpected transition {:?}", other),
            }
        }
        assert!(runs.len() > 20, "only {} runs", runs.len());
    }

    /// A pointer sweeping ~38px per frame keeps the creature playful for the
    /// whole session.
    #[test]
    fn test_continuous_play_never_bored() {
        let mut t = terrarium(2);
        let log = simulate(&mut t, 60_000, circle(200.0, 0.012));
        assert_eq!(log[0].1, Mood::Bored);
        assert!(log[1..].iter().all(|&(_, m)| m == Mood::Playful));
    }

    /// Gentle motion (between still and playful) keeps it content.
    #[test]
    fn test_gentle_motion_keeps_content() {
        let mut t = terrarium(3);
        // 1.2 rad/s on a 100px circle: ~1.9px per frame
        let log = simulate(&mut t, 60_000, circle(100.0, 0.0012));
        let runs = transitions(&log);
        assert_eq!(runs, vec![(0, Mood::Bored), (16, Mood::Content)]);
        assert_eq!(t.timers().last_change_at, 60_000);
    }

    /// While chasing a circling pointer the tail is always farther from the
    /// pointer than the head is.
    #[test]
    fn test_tail_lags_head() {
        let mut t = terrarium(4);
        let path = circle(200.0, 0.003);
        let mut now = 0;
        while now <= 20_000 {
            let pointer = path(now);
            t.tick(&FrameInput::at(pointer), now);
            if now > 5_000 {
                let head = t.segments()[0].center.distance(&pointer);
                let tail = t.segments()[14].center.distance(&pointer);
                assert!(tail > head, "t={} head {} tail {}", now, head, tail);
            }
            now += FRAME_MS;
        }
    }

    /// An angry creature wanders between random points, all of them on the
    /// canvas, and never resamples faster than the wander interval.
    #[test]
    fn test_angry_wander_stays_on_canvas() {
        let mut t = terrarium(5);
        t.tick(&FrameInput::at(Point::new(400.0, 300.0)).with_presses(3), 0);
        assert_eq!(t.mood(), Mood::Angry);

        let mut targets = Vec::new();
        let mut now = FRAME_MS;
        // Pointer stays put; stillness calms the creature after 3s
        while t.mood() == Mood::Angry {
            t.tick(&FrameInput::at(Point::new(400.0, 300.0)), now);
            let wander = *t.body().wander();
            if targets.last() != Some(&wander) {
                targets.push(wander);
            }
            now += FRAME_MS;
        }

        assert!(targets.len() >= 2, "wander never resampled: {:?}", targets);
        for pair in targets.windows(2) {
            assert!(pair[1].resampled_at - pair[0].resampled_at > 2000);
        }
        for w in &targets {
            assert!((0.0..=800.0).contains(&w.target.x));
            assert!((0.0..=600.0).contains(&w.target.y));
        }
        for s in t.segments() {
            assert!(s.center.x >= 0.0 && s.center.x <= 800.0);
            assert!(s.center.y >= 0.0 && s.center.y <= 600.0);
        }
    }
}
