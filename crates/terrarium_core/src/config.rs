use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerrariumConfig {
    pub canvas: CanvasConfig,
    pub mood: MoodThresholds,
    pub motion: MotionConfig,
    pub render: RenderConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("canvas must be at least 1x1, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("fps must be between 1 and 1000, got {0}")]
    InvalidFps(u32),

    #[error("{name} must be in (0, 1], got {value}")]
    SmoothingOutOfRange { name: &'static str, value: f32 },

    #[error("segment size must be positive")]
    ZeroSegmentSize,

    #[error("mood thresholds out of order: {0}")]
    ThresholdOrder(&'static str),
}

impl TerrariumConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied and the result validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: TerrariumConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        config.validate().with_context(|| "Invalid config")?;
        Ok(config)
    }

    /// Try to load from path; if the file is missing or invalid, return
    /// defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({:#}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                if let Err(e) = cfg.validate() {
                    tracing::warn!("Ignoring environment overrides ({}), using defaults", e);
                    cfg = Self::default();
                }
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("TERRARIUM_FPS") {
            if let Ok(n) = v.parse() {
                self.render.fps = n;
            }
        }
        if let Ok(v) = std::env::var("TERRARIUM_SEED") {
            if let Ok(n) = v.parse() {
                self.simulation.seed = Some(n);
            }
        }
        if let Ok(v) = std::env::var("TERRARIUM_RADIUS") {
            match v.as_str() {
                "full" => self.render.radius = RadiusMode::Full,
                "half" => self.render.radius = RadiusMode::Half,
                other => tracing::warn!("Unknown TERRARIUM_RADIUS value {:?}", other),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        if self.render.fps == 0 || self.render.fps > 1000 {
            return Err(ConfigError::InvalidFps(self.render.fps));
        }
        if self.motion.segment_size == 0 {
            return Err(ConfigError::ZeroSegmentSize);
        }
        let factors = [
            ("motion.head_smoothing", self.motion.head_smoothing),
            ("motion.angry_head_smoothing", self.motion.angry_head_smoothing),
            ("motion.follow_smoothing", self.motion.follow_smoothing),
            ("render.color_smoothing", self.render.color_smoothing),
        ];
        for (name, value) in factors {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::SmoothingOutOfRange { name, value });
            }
        }
        let m = &self.mood;
        if !(m.bored_after_ms <= m.sad_after_ms && m.sad_after_ms <= m.neglect_anger_after_ms) {
            return Err(ConfigError::ThresholdOrder(
                "bored_after_ms <= sad_after_ms <= neglect_anger_after_ms",
            ));
        }
        if m.calm_after_ms > m.angry_timeout_ms {
            return Err(ConfigError::ThresholdOrder("calm_after_ms <= angry_timeout_ms"));
        }
        if m.still_speed > m.playful_speed {
            return Err(ConfigError::ThresholdOrder("still_speed <= playful_speed"));
        }
        Ok(())
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl CanvasConfig {
    pub fn center(&self) -> crate::Point {
        crate::Point::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// Timings (ms) and pointer speeds (px/frame) that drive the mood machine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MoodThresholds {
    /// Presses closer together than this extend a click burst.
    pub burst_window_ms: u64,
    /// Burst length that provokes rage.
    pub rage_burst_count: u32,
    /// The last press must be this recent for the burst to count.
    pub rage_recency_ms: u64,
    /// Below this speed an angry creature can calm down...
    pub calm_speed: f32,
    /// ...once it has been angry this long.
    pub calm_after_ms: u64,
    /// Anger always fades after this long.
    pub angry_timeout_ms: u64,
    /// Above this speed the creature turns playful.
    pub playful_speed: f32,
    /// Playfulness survives brief stillness for this long.
    pub playful_hold_ms: u64,
    /// Below this speed the pointer counts as stationary.
    pub still_speed: f32,
    pub bored_after_ms: u64,
    pub sad_after_ms: u64,
    pub neglect_anger_after_ms: u64,
}

impl Default for MoodThresholds {
    fn default() -> Self {
        Self {
            burst_window_ms: 500,
            rage_burst_count: 3,
            rage_recency_ms: 1_500,
            calm_speed: 5.0,
            calm_after_ms: 3_000,
            angry_timeout_ms: 10_000,
            playful_speed: 30.0,
            playful_hold_ms: 500,
            still_speed: 1.0,
            bored_after_ms: 3_000,
            sad_after_ms: 10_000,
            neglect_anger_after_ms: 15_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub segment_size: u32,
    /// Vertical gap between segment centers in the initial stack.
    pub segment_spacing: f32,
    pub head_smoothing: f32,
    pub angry_head_smoothing: f32,
    pub follow_smoothing: f32,
    pub wander_interval_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            segment_size: 20,
            segment_spacing: 15.0,
            head_smoothing: 0.10,
            angry_head_smoothing: 0.15,
            follow_smoothing: 0.10,
            wander_interval_ms: 2_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusMode {
    /// Circles are drawn with radius `segment_size / 2`.
    #[default]
    Half,
    /// Circles are drawn with radius `segment_size`.
    Full,
}

impl RadiusMode {
    pub fn radius(self, segment_size: u32) -> f32 {
        match self {
            RadiusMode::Half => segment_size as f32 / 2.0,
            RadiusMode::Full => segment_size as f32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub fps: u32,
    pub radius: RadiusMode,
    /// Fraction of the gap to the mood color closed per frame. 1.0 snaps.
    pub color_smoothing: f32,
    /// Gentle breathing of the head radius.
    pub head_pulse: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            radius: RadiusMode::Half,
            color_smoothing: 1.0,
            head_pulse: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the wander-target RNG. Random when unset.
    pub seed: Option<u64>,
}

// ============================================================================
// Tests
// ============================================================================
