//! Mood State Machine
//!
//! A flat machine over the five moods. Each frame it evaluates, in fixed
//! priority order:
//!
//! 1. rage trigger (rapid click burst), overriding everything else
//! 2. anger cool-down, only while already angry
//! 3. pointer-speed rules: playful, playful hold, stillness ladder, content
//!
//! and settles on exactly one mood. `last_change_at` is the anchor for the
//! stillness ladder: it moves forward only while the creature is engaged and
//! the pointer is actually moving.

use serde::{Deserialize, Serialize};
use terrarium_core::{ClickBurst, Mood, MoodThresholds};

/// Timestamps (ms) stamped when a mood is entered or the pointer engages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTimers {
    pub playful_entered_at: u64,
    pub sad_entered_at: u64,
    pub angry_entered_at: u64,
    /// Last frame the creature was Content or Playful with a moving pointer.
    pub last_change_at: u64,
}

impl MoodTimers {
    /// Every timer starts at the moment the simulation is created.
    pub fn starting_at(now: u64) -> Self {
        Self {
            playful_entered_at: now,
            sad_entered_at: now,
            angry_entered_at: now,
            last_change_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MoodMachine {
    mood: Mood,
    timers: MoodTimers,
    thresholds: MoodThresholds,
}

impl MoodMachine {
    /// A fresh machine starts Bored.
    pub fn new(thresholds: MoodThresholds, now: u64) -> Self {
        Self::starting_in(Mood::default(), thresholds, now)
    }

    /// Start in an arbitrary mood, as if it had just been entered at `now`.
    pub fn starting_in(mood: Mood, thresholds: MoodThresholds, now: u64) -> Self {
        Self {
            mood,
            timers: MoodTimers::starting_at(now),
            thresholds,
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn timers(&self) -> &MoodTimers {
        &self.timers
    }

    pub fn thresholds(&self) -> &MoodThresholds {
        &self.thresholds
    }

    /// Run one frame of the machine and return the resulting mood.
    ///
    /// `burst` is reset to zero when it provokes a rage transition.
    pub fn update(&mut self, speed: f32, burst: &mut ClickBurst, now: u64) -> Mood {
        let previous = self.mood;
        let next = self.select(speed, burst, now);

        if next != previous {
            if next == Mood::Sad {
                self.timers.sad_entered_at = now;
            }
            tracing::debug!(from = %previous, to = %next, speed, now, "mood transition");
        }

        self.mood = next;
        next
    }

    fn select(&mut self, speed: f32, burst: &mut ClickBurst, now: u64) -> Mood {
        let t = &self.thresholds;

        // 1. Rapid clicking always wins.
        if burst.count >= t.rage_burst_count && burst.clicked_within(now, t.rage_recency_ms) {
            burst.clear();
            self.timers.angry_entered_at = now;
            return Mood::Angry;
        }

        // 2. An angry creature only ever cools down to Content this frame.
        if self.mood == Mood::Angry {
            let angry_for = now.saturating_sub(self.timers.angry_entered_at);
            let soothed = speed < t.calm_speed && angry_for > t.calm_after_ms;
            if soothed || angry_for > t.angry_timeout_ms {
                return Mood::Content;
            }
            return Mood::Angry;
        }

        // 3. Pointer-speed rules.
        let next = if speed > t.playful_speed {
            self.timers.playful_entered_at = now;
            Mood::Playful
        } else if self.mood == Mood::Playful
            && now.saturating_sub(self.timers.playful_entered_at) < t.playful_hold_ms
        {
            Mood::Playful
        } else if speed < t.still_speed {
            let idle_for = now.saturating_sub(self.timers.last_change_at);
            if idle_for > t.neglect_anger_after_ms {
                self.timers.angry_entered_at = now;
                Mood::Angry
            } else if idle_for > t.sad_after_ms {
                Mood::Sad
            } else if idle_for > t.bored_after_ms {
                Mood::Bored
            } else {
                self.mood
            }
        } else {
            Mood::Content
        };

        // 4. Engagement keeps the stillness ladder at bay.
        if next.is_engaged() && speed >= t.still_speed {
            self.timers.last_change_at = now;
        }

        next
    }
}
