//! Face registry.
//!
//! Faces are stored under upper-snake keys. Some faces have an oriented
//! variant stored as `<FACE>_<DIRECTION>`, which takes precedence over the
//! plain key when resolving a face for a direction.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::Direction;

/// Named emoticon faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Face {
    Alarmed,
    Anguish,
    Cool,
    Happy,
    Lenny,
    Look,
    Pretty,
    Puppy,
    Rage,
    Smile,
    Solemn,
    Strained,
    UCantBeSrs,
}

impl Face {
    pub const ALL: [Face; 13] = [
        Face::Alarmed,
        Face::Anguish,
        Face::Cool,
        Face::Happy,
        Face::Lenny,
        Face::Look,
        Face::Pretty,
        Face::Puppy,
        Face::Rage,
        Face::Smile,
        Face::Solemn,
        Face::Strained,
        Face::UCantBeSrs,
    ];

    /// Registry key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Alarmed => "ALARMED",
            Self::Anguish => "ANGUISH",
            Self::Cool => "COOL",
            Self::Happy => "HAPPY",
            Self::Lenny => "LENNY",
            Self::Look => "LOOK",
            Self::Pretty => "PRETTY",
            Self::Puppy => "PUPPY",
            Self::Rage => "RAGE",
            Self::Smile => "SMILE",
            Self::Solemn => "SOLEMN",
            Self::Strained => "STRAINED",
            Self::UCantBeSrs => "U_CANT_BE_SRS",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.key() == key)
    }
}

lazy_static! {
    static ref FACES: HashMap<&'static str, &'static str> = [
        ("ALARMED", "°□°"),
        ("ANGUISH", "ﾟДﾟ"),
        ("COOL", "⌐■_■"),
        ("COOL_LEFT", "■_■¬"),
        ("HAPPY", "✿◠‿◠"),
        ("HAPPY_LEFT", "◠‿◠✿"),
        ("LENNY", "͡° ͜ʖ ͡°"),
        ("LOOK", "ಠ_ಠ"),
        ("PRETTY", "✿╹◡╹"),
        ("PRETTY_LEFT", "╹◡╹✿"),
        ("PUPPY", "ᵔᴥᵔ"),
        ("RAGE", "ಠ益ಠ"),
        ("SMILE", "^‿^"),
        ("SOLEMN", "º _ º"),
        ("STRAINED", ";¬_¬"),
        ("STRAINED_LEFT", "¬_¬;"),
        ("U_CANT_BE_SRS", "ಠ╭╮ಠ"),
    ]
    .into_iter()
    .collect();
}

/// Look up a glyph by registry key, e.g. `RAGE` or `COOL_LEFT`.
pub fn get_face(key: &str) -> Option<&'static str> {
    FACES.get(key).copied()
}

/// Resolve the glyph for a face in a direction.
///
/// Tries `<FACE>_<DIRECTION>`, then `<FACE>`. A face with no glyph renders
/// as the empty string.
pub fn resolve_face(face: Face, direction: Direction) -> &'static str {
    get_face(&format!("{}_{}", face.key(), direction.key()))
        .or_else(|| get_face(face.key()))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn every_face_has_a_plain_glyph() {
        for face in Face::ALL {
            assert!(get_face(face.key()).is_some(), "missing {}", face.key());
        }
    }

    #[test]
    fn key_roundtrip() {
        for face in Face::ALL {
            assert_eq!(Face::from_key(face.key()), Some(face));
        }
        assert_eq!(Face::from_key("SMIRK"), None);
    }

    #[rstest]
    #[case(Face::Cool, Direction::Left, "■_■¬")]
    #[case(Face::Cool, Direction::Right, "⌐■_■")]
    #[case(Face::Strained, Direction::Left, "¬_¬;")]
    #[case(Face::Rage, Direction::Left, "ಠ益ಠ")]
    #[case(Face::Rage, Direction::Right, "ಠ益ಠ")]
    #[case(Face::Solemn, Direction::Left, "º _ º")]
    fn oriented_variant_preferred(
        #[case] face: Face,
        #[case] direction: Direction,
        #[case] expected: &str,
    ) {
        assert_eq!(resolve_face(face, direction), expected);
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(get_face("NOPE"), None);
        assert_eq!(get_face("RAGE_UP"), None);
    }
}
