//! Value types shared by the engine and its callers.

use std::fmt;

use crate::ids::{actor_id, set_id};

/// The four Mandarin tones plus the neutral tone.
///
/// `Unknown` is only an intermediate state inside the tone extractor; every
/// [`ParsedSyllable`] carries one of the five real tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Tone {
    #[default]
    Unknown = 0,
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    Neutral = 5,
}

impl Tone {
    /// Numeric tone (1-5, or 0 for `Unknown`).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Tone::number`] for the five real tones.
    pub fn from_number(n: u8) -> Option<Tone> {
        match n {
            1 => Some(Tone::First),
            2 => Some(Tone::Second),
            3 => Some(Tone::Third),
            4 => Some(Tone::Fourth),
            5 => Some(Tone::Neutral),
            _ => None,
        }
    }

    /// Default name of the room inside a set that stands for this tone.
    pub fn room(self) -> &'static str {
        match self {
            Tone::First => "Outside entrance",
            Tone::Second => "Kitchen/Hallway",
            Tone::Third => "Bedroom/Living room",
            Tone::Fourth => "Bathroom/Backyard",
            Tone::Neutral => "Roof",
            Tone::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The actor families an initial can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorCategory {
    /// Plain consonant initials.
    Male,
    /// Consonant + i, and the `y` null initial.
    Female,
    /// Consonant + u, and the `w` null initial.
    Fictional,
    /// Consonant + ü (including ju/qu/xu), and the `yu` null initial.
    GodLeader,
    /// No initial at all.
    Null,
}

impl ActorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ActorCategory::Male => "male",
            ActorCategory::Female => "female",
            ActorCategory::Fictional => "fictional",
            ActorCategory::GodLeader => "god_leader",
            ActorCategory::Null => "null",
        }
    }
}

impl fmt::Display for ActorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A syllable split into initial, final and tone.
///
/// `initial` and `final_` are empty for the null initial / null final.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedSyllable {
    /// The input exactly as given.
    pub full: String,
    pub initial: String,
    pub final_: String,
    pub tone: Tone,
}

impl ParsedSyllable {
    /// The actor/set/tone triple a mnemonic scene is keyed by.
    pub fn scene_key(&self) -> SceneKey {
        SceneKey { actor_id: actor_id(&self.initial), set_id: set_id(&self.final_), tone: self.tone }
    }
}

/// Lookup key for a scene: actor id, set id and tone room.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneKey {
    pub actor_id: String,
    pub set_id: String,
    pub tone: Tone,
}

impl fmt::Display for SceneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.actor_id, self.set_id, self.tone)
    }
}
