//! Scenario tests with literal timestamps.
//!
//! Each scenario drives the simulation at a steady 16ms cadence and lands an
//! extra tick exactly on every boundary it checks.

use rand::rngs::StdRng;
use rand::SeedableRng;
use terrarium_core::{ClickBurst, FrameInput, Mood, MoodThresholds, Point, TerrariumConfig};
use terrarium_limbic::{MoodMachine, Terrarium};

const FRAME_MS: u64 = 16;

/// A terrarium plus a scripted pointer that moves `step` px along x per tick.
struct Scenario {
    terrarium: Terrarium,
    pointer: Point,
    step: f32,
    last_tick: Option<u64>,
}

impl Scenario {
    fn starting_in(mood: Mood) -> Self {
        let config = TerrariumConfig::default();
        let machine = MoodMachine::starting_in(mood, config.mood.clone(), 0);
        let terrarium =
            Terrarium::with_rng(&config, 0, StdRng::seed_from_u64(11)).with_machine(machine);
        Self {
            terrarium,
            pointer: Point::new(400.0, 300.0),
            step: 0.0,
            last_tick: None,
        }
    }

    fn moving(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    fn tick_at(&mut self, now: u64) -> Mood {
        if self.last_tick.is_some() {
            self.pointer.x += self.step;
        }
        self.last_tick = Some(now);
        self.terrarium.tick(&FrameInput::at(self.pointer), now).mood
    }

    /// One tick carrying a single press.
    fn press_at(&mut self, now: u64) -> Mood {
        self.last_tick = Some(now);
        self.terrarium
            .tick(&FrameInput::at(self.pointer).with_presses(1), now)
            .mood
    }

    /// Tick on the 16ms grid up to (excluding) `target`, then exactly at it.
    fn advance_to(&mut self, target: u64) -> Mood {
        let mut next = match self.last_tick {
            Some(t) => (t / FRAME_MS + 1) * FRAME_MS,
            None => 0,
        };
        while next < target {
            self.tick_at(next);
            next += FRAME_MS;
        }
        self.tick_at(target)
    }
}

// ============================================================================
// Rage trigger
// ============================================================================

#[test]
fn rage_trigger_from_three_rapid_presses() {
    let thresholds = MoodThresholds::default();
    let mut machine = MoodMachine::starting_in(Mood::Content, thresholds.clone(), 0);
    let mut burst = ClickBurst::default();
    for at in [0, 300, 600] {
        burst.register(at, thresholds.burst_window_ms);
    }
    assert_eq!(burst.count, 3);

    assert_eq!(machine.update(0.0, &mut burst, 700), Mood::Angry);
    assert_eq!(burst.count, 0);
    assert_eq!(machine.timers().angry_entered_at, 700);
}

#[test]
fn rage_trigger_through_frames() {
    let mut s = Scenario::starting_in(Mood::Content);
    assert_eq!(s.press_at(0), Mood::Content);
    assert_eq!(s.press_at(300), Mood::Content);
    assert_eq!(s.press_at(600), Mood::Angry);
    assert_eq!(s.terrarium.sampler().burst().count, 0);
    assert_eq!(s.advance_to(700), Mood::Angry);
}

#[test]
fn slow_presses_never_enrage() {
    let mut s = Scenario::starting_in(Mood::Content);
    for now in [0, 600, 1200, 1800, 2400] {
        let mood = s.press_at(now);
        assert_ne!(mood, Mood::Angry, "enraged at t={}", now);
        assert_eq!(s.terrarium.sampler().burst().count, 1);
    }
}

// ============================================================================
// Anger cool-down
// ============================================================================

#[test]
fn angry_calms_after_three_seconds_of_stillness() {
    let mut s = Scenario::starting_in(Mood::Angry);
    assert_eq!(s.advance_to(3000), Mood::Angry);
    assert_eq!(s.advance_to(3001), Mood::Content);
}

#[test]
fn angry_times_out_after_ten_seconds_of_motion() {
    let mut s = Scenario::starting_in(Mood::Angry).moving(6.0);
    assert_eq!(s.advance_to(3001), Mood::Angry);
    assert_eq!(s.advance_to(10_000), Mood::Angry);
    assert!(s.terrarium.speed() >= 5.0);
    assert_eq!(s.advance_to(10_001), Mood::Content);
}

// ============================================================================
// Stillness ladder
// ============================================================================

#[test]
fn stillness_ladder_boundaries() {
    let mut s = Scenario::starting_in(Mood::Content);

    assert_eq!(s.advance_to(2999), Mood::Content);
    assert_eq!(s.advance_to(3000), Mood::Content);
    assert_eq!(s.advance_to(3001), Mood::Bored);

    assert_eq!(s.advance_to(9999), Mood::Bored);
    assert_eq!(s.advance_to(10_000), Mood::Bored);
    assert_eq!(s.advance_to(10_001), Mood::Sad);

    assert_eq!(s.advance_to(14_999), Mood::Sad);
    assert_eq!(s.advance_to(15_000), Mood::Sad);
    assert_eq!(s.advance_to(15_001), Mood::Angry);
    assert_eq!(s.terrarium.timers().angry_entered_at, 15_001);
    assert_eq!(s.terrarium.timers().sad_entered_at, 10_001);
}

#[test]
fn moderate_motion_resets_the_ladder() {
    let mut s = Scenario::starting_in(Mood::Content);
    assert_eq!(s.advance_to(5000), Mood::Bored);

    s.step = 10.0;
    assert_eq!(s.advance_to(5016), Mood::Content);
    assert_eq!(s.terrarium.timers().last_change_at, 5016);

    s.step = 0.0;
    assert_eq!(s.advance_to(8016), Mood::Content);
    assert_eq!(s.advance_to(8017), Mood::Bored);
}

// ============================================================================
// Playful debounce
// ============================================================================

#[test]
fn playful_holds_through_brief_stillness() {
    let mut machine = MoodMachine::starting_in(Mood::Content, MoodThresholds::default(), 0);
    let mut burst = ClickBurst::default();

    assert_eq!(machine.update(45.0, &mut burst, 0), Mood::Playful);
    assert_eq!(machine.timers().last_change_at, 0);

    let mut now = 100;
    while now < 500 {
        assert_eq!(machine.update(0.0, &mut burst, now), Mood::Playful, "t={}", now);
        now += FRAME_MS;
    }

    // Hold expired: the ladder takes over, still timing from t=0
    assert_eq!(machine.update(0.0, &mut burst, 500), Mood::Playful);
    assert_eq!(machine.update(0.0, &mut burst, 3000), Mood::Playful);
    assert_eq!(machine.update(0.0, &mut burst, 3001), Mood::Bored);
    assert_eq!(machine.timers().last_change_at, 0);
}

// ============================================================================
// Body chain
// ============================================================================

#[test]
fn follower_distance_decays_geometrically() {
    let mut s = Scenario::starting_in(Mood::Content);
    let head = s.terrarium.head();
    s.pointer = head;

    let initial = s.terrarium.segments()[1].center.distance(&head);
    assert!((initial - 15.0).abs() < 1e-4);

    let mut previous = initial;
    for i in 0..50u64 {
        s.tick_at(i * FRAME_MS);
        assert_eq!(s.terrarium.head(), head, "head drifted on tick {}", i);
        let d = s.terrarium.segments()[1].center.distance(&head);
        assert!(
            (d - previous * 0.9).abs() < 1e-3,
            "tick {}: {} -> {}, expected factor 0.9",
            i,
            previous,
            d
        );
        previous = d;
    }

    // Small slack for f32 rounding around y=300
    let bound = initial * 0.9f32.powi(50);
    assert!(previous <= bound + 1e-3, "residual {} > {}", previous, bound);
    assert!(previous < initial * 0.006);
}

#[test]
fn whole_chain_collapses_onto_fixed_target() {
    let mut s = Scenario::starting_in(Mood::Content);
    s.pointer = Point::new(200.0, 150.0);
    // 8s on a steady target is well past the chain's lag
    for i in 0..500u64 {
        s.tick_at(i * FRAME_MS);
    }
    let tail = s.terrarium.segments()[14].center;
    assert!(tail.distance(&Point::new(200.0, 150.0)) < 1.0, "tail at {:?}", tail);
}

#[test]
fn head_at_target_does_not_move() {
    let mut s = Scenario::starting_in(Mood::Bored);
    let head = s.terrarium.head();
    s.pointer = head;
    s.tick_at(0);
    assert_eq!(s.terrarium.head(), head);
}
