//! Argument parsing for `flip` and `unflip`.
//!
//! Parses the text after the verb into a [`ParsedCommand`].

use crate::{CommandError, Direction, Face, FlippableItem, ParsedCommand, Result, Verb};

/// A recognized `-flag` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Table,
    Face(Face),
    Right,
    Help,
}

/// Flags in the order they are listed in help text.
const FLAGS: &[(&str, Flag)] = &[
    ("-table", Flag::Table),
    ("-rage", Flag::Face(Face::Rage)),
    ("-alarmed", Flag::Face(Face::Alarmed)),
    ("-solemn", Flag::Face(Face::Solemn)),
    ("-lenny", Flag::Face(Face::Lenny)),
    ("-right", Flag::Right),
    ("-anguish", Flag::Face(Face::Anguish)),
    ("-smile", Flag::Face(Face::Smile)),
    ("-happy", Flag::Face(Face::Happy)),
    ("-cool", Flag::Face(Face::Cool)),
    ("-puppy", Flag::Face(Face::Puppy)),
    ("-strained", Flag::Face(Face::Strained)),
    ("-pretty", Flag::Face(Face::Pretty)),
    ("-look", Flag::Face(Face::Look)),
    ("-deadpan", Flag::Face(Face::UCantBeSrs)),
    ("-help", Flag::Help),
];

impl Flag {
    /// Look up an exact flag token.
    pub fn from_token(token: &str) -> Option<Self> {
        FLAGS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|&(_, flag)| flag)
    }
}

/// `Available Arguments: -table, -rage, ...`
pub fn available_arguments() -> String {
    let names: Vec<&str> = FLAGS.iter().map(|(name, _)| *name).collect();
    format!("Available Arguments: {}", names.join(", "))
}

/// Parse the argument string following `verb`.
///
/// Without any `-` in the input the whole string is the phrase (or the table
/// if empty). Otherwise tokens are folded left to right:
/// - flags overwrite their field, so the last one wins
/// - `-help` and unknown flags abort with a [`CommandError`]
/// - other tokens extend the phrase while the target is still a phrase
///
/// A phrase left empty after the fold becomes the table.
///
/// # Examples
/// ```
/// use tableflip_core::{parse_arguments, Face, FlippableItem, Verb};
/// let cmd = parse_arguments(Verb::Flip, "-rage").unwrap();
/// assert_eq!(cmd.flipped_item, FlippableItem::Table);
/// assert_eq!(cmd.face, Face::Rage);
/// assert!(parse_arguments(Verb::Flip, "-nope").is_err());
/// ```
pub fn parse_arguments(verb: Verb, input: &str) -> Result<ParsedCommand> {
    let input = input.trim();

    if !input.contains('-') {
        return Ok(ParsedCommand::new(
            verb,
            FlippableItem::phrase_or_table(input),
        ));
    }

    let initial = ParsedCommand::new(verb, FlippableItem::Phrase(String::new()));
    let parsed = input
        .split_whitespace()
        .try_fold(initial, |acc, token| apply_token(verb, acc, token))?;

    let blank = matches!(&parsed.flipped_item, FlippableItem::Phrase(p) if p.trim().is_empty());
    Ok(if blank {
        parsed.with_item(FlippableItem::Table)
    } else {
        parsed
    })
}

fn apply_token(verb: Verb, acc: ParsedCommand, token: &str) -> Result<ParsedCommand> {
    match Flag::from_token(token) {
        Some(Flag::Table) => Ok(acc.with_item(FlippableItem::Table)),
        Some(Flag::Face(face)) => Ok(acc.with_face(face)),
        Some(Flag::Right) => Ok(acc.with_direction(Direction::Right)),
        Some(Flag::Help) => Err(CommandError::new(
            verb.usage_label(),
            available_arguments(),
        )),
        None if token.starts_with('-') => Err(CommandError::new(
            format!("Unknown Argument: {}", token),
            available_arguments(),
        )),
        None => {
            // Free text is ignored once a fixed target was chosen
            let extended = match &acc.flipped_item {
                FlippableItem::Phrase(payload) => format!("{}{} ", payload, token),
                _ => return Ok(acc),
            };
            Ok(acc.with_item(FlippableItem::Phrase(extended)))
        }
    }
}
