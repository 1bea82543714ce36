//! Core Terrarium implementation
//!
//! `Terrarium` is the single owned simulation record. It:
//! - Owns the input sampler, the mood machine, the body chain and the RNG
//! - Runs one frame per call to [`Terrarium::tick`], in dependency order
//! - Exposes read-only views for the presentation layer

use crate::body::{BodyChain, BodySegment};
use crate::machine::{MoodMachine, MoodTimers};
use crate::sampler::InputSampler;
use rand::rngs::StdRng;
use rand::SeedableRng;
use terrarium_core::{CanvasConfig, FrameInput, Mood, Point, TerrariumConfig, SEGMENT_COUNT};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub now: u64,
    pub previous_mood: Mood,
    pub mood: Mood,
    pub speed: f32,
}

impl TickReport {
    pub fn mood_changed(&self) -> bool {
        self.previous_mood != self.mood
    }
}

pub struct Terrarium {
    sampler: InputSampler,
    machine: MoodMachine,
    body: BodyChain,
    rng: StdRng,
    pointer: Point,
    ticks: u64,
}

impl Terrarium {
    /// Create the simulation at clock time `now`. The pointer is assumed to
    /// rest at the canvas center until the first frame says otherwise.
    pub fn new(config: &TerrariumConfig, now: u64) -> Self {
        let rng = match config.simulation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, now, rng)
    }

    pub fn with_rng(config: &TerrariumConfig, now: u64, rng: StdRng) -> Self {
        tracing::info!(
            segments = SEGMENT_COUNT,
            width = config.canvas.width,
            height = config.canvas.height,
            "terrarium created"
        );
        Self {
            sampler: InputSampler::new(config.mood.burst_window_ms),
            machine: MoodMachine::new(config.mood.clone(), now),
            body: BodyChain::new(config.motion.clone(), config.canvas.clone(), now),
            rng,
            pointer: config.canvas.center(),
            ticks: 0,
        }
    }

    /// Replace the mood machine, e.g. to start a scenario in a given mood.
    pub fn with_machine(mut self, machine: MoodMachine) -> Self {
        self.machine = machine;
        self
    }

    /// Advance one frame. `now` is the tick's single clock sample.
    pub fn tick(&mut self, input: &FrameInput, now: u64) -> TickReport {
        let previous_mood = self.machine.mood();

        // Input Sampler
        for _ in 0..input.presses {
            self.sampler.register_press(now);
        }
        let speed = self.sampler.sample(input.pointer, now);
        self.pointer = input.pointer;

        // Mood State Machine
        let mood = self.machine.update(speed, self.sampler.burst_mut(), now);

        // Body Chain Simulator
        self.body.step(mood, input.pointer, now, &mut self.rng);

        self.ticks += 1;
        tracing::trace!(tick = self.ticks, now, speed, mood = %mood, "tick");

        TickReport {
            now,
            previous_mood,
            mood,
            speed,
        }
    }

    pub fn mood(&self) -> Mood {
        self.machine.mood()
    }

    pub fn timers(&self) -> &MoodTimers {
        self.machine.timers()
    }

    pub fn speed(&self) -> f32 {
        self.sampler.speed()
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn segments(&self) -> &[BodySegment; SEGMENT_COUNT] {
        self.body.segments()
    }

    pub fn head(&self) -> Point {
        self.body.head()
    }

    pub fn body(&self) -> &BodyChain {
        &self.body
    }

    pub fn sampler(&self) -> &InputSampler {
        &self.sampler
    }

    pub fn canvas(&self) -> &CanvasConfig {
        self.body.canvas()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
