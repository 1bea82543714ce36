//! Discrete mood of the creature.
//!
//! Exactly one mood is active at a time. The state machine that moves between
//! them lives in `terrarium_limbic`; everything else only reads it.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Nobody has played for a while.
    #[default]
    Bored,
    /// Pointer is moving at a relaxed pace.
    Content,
    /// Fast swipes.
    Playful,
    /// Long neglect.
    Sad,
    /// Rapid clicking, or neglect beyond sadness.
    Angry,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Bored,
        Mood::Content,
        Mood::Playful,
        Mood::Sad,
        Mood::Angry,
    ];

    /// Capitalized display name, as shown in the "Mood: ..." label.
    pub fn name(self) -> &'static str {
        match self {
            Mood::Bored => "Bored",
            Mood::Content => "Content",
            Mood::Playful => "Playful",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
        }
    }

    /// Whether the creature is actively engaged with the pointer.
    pub fn is_engaged(self) -> bool {
        matches!(self, Mood::Content | Mood::Playful)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
