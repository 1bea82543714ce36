//! Presentation for the terrarium: mood colors, facial expressions and
//! per-frame scene composition.

pub mod face;
pub mod palette;
pub mod scene;

pub use face::{Expression, Stroke};
pub use palette::{mood_color, ColorEase, Rgb};
pub use scene::{head_pulse, Disc, Label, Presenter, Scene};

/// Where composed scenes go: a terminal, a log, a test buffer.
pub trait Stage {
    fn present(&mut self, scene: &Scene) -> anyhow::Result<()>;
}
