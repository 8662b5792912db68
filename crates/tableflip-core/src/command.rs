//! Core command types.

use serde::{Deserialize, Serialize};

use crate::Face;

/// Top-level command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Flip,
    Unflip,
}

impl Verb {
    /// All verbs, in the order they are advertised in usage text.
    pub const ALL: [Verb; 2] = [Verb::Flip, Verb::Unflip];

    /// Parse from the command word. Exact, case-sensitive match.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "flip" => Some(Self::Flip),
            "unflip" => Some(Self::Unflip),
            _ => None,
        }
    }

    /// The command word itself.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Flip => "flip",
            Self::Unflip => "unflip",
        }
    }

    /// Face used when no face flag is given.
    pub fn default_face(&self) -> Face {
        match self {
            Self::Flip => Face::Alarmed,
            Self::Unflip => Face::Solemn,
        }
    }

    /// Error message for `-help`.
    pub fn usage_label(&self) -> &'static str {
        match self {
            Self::Flip => "Flip Usage",
            Self::Unflip => "Un-Flip Usage",
        }
    }

    /// Past tense, for the user mention attachment.
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Flip => "flipped",
            Self::Unflip => "unflipped",
        }
    }
}

/// Orientation of the template and of oriented face variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Direction {
    #[default]
    Left,
    Right,
}

impl Direction {
    /// Registry key suffix.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

/// The thing being flipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "UPPERCASE")]
pub enum FlippableItem {
    Table,
    Person,
    Phrase(String),
}

impl FlippableItem {
    /// A phrase, or the table when the text is blank.
    pub fn phrase_or_table(text: &str) -> Self {
        if text.trim().is_empty() {
            Self::Table
        } else {
            Self::Phrase(text.to_string())
        }
    }

    pub fn is_phrase(&self) -> bool {
        matches!(self, Self::Phrase(_))
    }
}

/// Output of the argument parser, consumed by the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub flipped_item: FlippableItem,
    pub face: Face,
    pub direction: Direction,
}

impl ParsedCommand {
    /// Defaults for a verb with the given target.
    pub fn new(verb: Verb, flipped_item: FlippableItem) -> Self {
        Self {
            flipped_item,
            face: verb.default_face(),
            direction: Direction::default(),
        }
    }

    pub fn with_face(self, face: Face) -> Self {
        Self { face, ..self }
    }

    pub fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }

    pub fn with_item(self, flipped_item: FlippableItem) -> Self {
        Self {
            flipped_item,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_word_roundtrip() {
        for verb in Verb::ALL {
            assert_eq!(Verb::from_word(verb.word()), Some(verb));
        }
        assert_eq!(Verb::from_word("Flip"), None);
        assert_eq!(Verb::from_word("doabarrelroll"), None);
    }

    #[test]
    fn default_faces_differ_per_verb() {
        assert_eq!(Verb::Flip.default_face(), Face::Alarmed);
        assert_eq!(Verb::Unflip.default_face(), Face::Solemn);
    }

    #[test]
    fn blank_phrase_is_table() {
        assert_eq!(FlippableItem::phrase_or_table(""), FlippableItem::Table);
        assert_eq!(FlippableItem::phrase_or_table("   "), FlippableItem::Table);
        assert_eq!(
            FlippableItem::phrase_or_table("hi"),
            FlippableItem::Phrase("hi".to_string())
        );
    }

    #[test]
    fn builders_replace_one_field() {
        let cmd = ParsedCommand::new(Verb::Flip, FlippableItem::Table)
            .with_face(Face::Rage)
            .with_direction(Direction::Right);
        assert_eq!(cmd.flipped_item, FlippableItem::Table);
        assert_eq!(cmd.face, Face::Rage);
        assert_eq!(cmd.direction, Direction::Right);
    }
}
