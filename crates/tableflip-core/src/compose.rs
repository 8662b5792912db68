//! Response composition.
//!
//! Renders a [`ParsedCommand`] into the display string for a verb:
//!
//! | verb   | left                     | right                     |
//! |--------|--------------------------|---------------------------|
//! | flip   | `(╯face)╯︵item`          | `item︵╰(face╰)`           |
//! | unflip | `itemノ(faceノ)`          | `(ヽface)ヽitem`            |
//!
//! A raging flip throws with `彡` instead of `︵`.

use crate::{flip_text, resolve_face, Direction, Face, FlippableItem, ParsedCommand, Verb};

const FLIPPED_TABLE: &str = "┻━┻";
const UPRIGHT_TABLE: &str = "┳━┳";
const FLIPPED_PERSON: &str = "/(.□. \\)";
const UPRIGHT_PERSON: &str = "(*￣m￣)";

/// Display text for the item under a verb.
pub fn render_item(verb: Verb, item: &FlippableItem) -> String {
    match (verb, item) {
        (Verb::Flip, FlippableItem::Table) => FLIPPED_TABLE.to_string(),
        (Verb::Unflip, FlippableItem::Table) => UPRIGHT_TABLE.to_string(),
        (Verb::Flip, FlippableItem::Person) => FLIPPED_PERSON.to_string(),
        (Verb::Unflip, FlippableItem::Person) => UPRIGHT_PERSON.to_string(),
        (Verb::Flip, FlippableItem::Phrase(payload)) => flip_text(payload.trim_end()),
        (Verb::Unflip, FlippableItem::Phrase(payload)) => payload.trim_end().to_string(),
    }
}

fn throw_glyph(face: Face) -> &'static str {
    match face {
        Face::Rage => "彡",
        _ => "︵",
    }
}

/// Compose the full response text.
///
/// # Examples
/// ```
/// use tableflip_core::{compose, parse_arguments, Verb};
/// let cmd = parse_arguments(Verb::Unflip, "-table").unwrap();
/// assert_eq!(compose(Verb::Unflip, &cmd), "┳━┳ノ(º _ ºノ)");
/// ```
pub fn compose(verb: Verb, command: &ParsedCommand) -> String {
    let face = resolve_face(command.face, command.direction);
    let item = render_item(verb, &command.flipped_item);

    match (verb, command.direction) {
        (Verb::Flip, Direction::Left) => {
            format!("(╯{})╯{}{}", face, throw_glyph(command.face), item)
        }
        (Verb::Flip, Direction::Right) => {
            format!("{}{}╰({}╰)", item, throw_glyph(command.face), face)
        }
        (Verb::Unflip, Direction::Left) => format!("{}ノ({}ノ)", item, face),
        (Verb::Unflip, Direction::Right) => format!("(ヽ{})ヽ{}", face, item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_arguments;
    use rstest::rstest;

    fn render(verb: Verb, args: &str) -> String {
        compose(verb, &parse_arguments(verb, args).unwrap())
    }

    #[rstest]
    #[case(Verb::Flip, "Thanks Obama", "(╯°□°)╯︵ɐɯɐqO sʞuɐɥ┴")]
    #[case(Verb::Unflip, "Thanks Obama", "Thanks Obamaノ(º _ ºノ)")]
    #[case(Verb::Flip, "-table", "(╯°□°)╯︵┻━┻")]
    #[case(Verb::Flip, "-rage Thanks Obama", "(╯ಠ益ಠ)╯彡ɐɯɐqO sʞuɐɥ┴")]
    #[case(Verb::Flip, "Thanks Obama -rage", "(╯ಠ益ಠ)╯彡ɐɯɐqO sʞuɐɥ┴")]
    #[case(Verb::Flip, "-table -rage", "(╯ಠ益ಠ)╯彡┻━┻")]
    #[case(Verb::Flip, "-rage -table", "(╯ಠ益ಠ)╯彡┻━┻")]
    #[case(Verb::Flip, "-table Thanks Obama", "(╯°□°)╯︵┻━┻")]
    #[case(Verb::Unflip, "-table", "┳━┳ノ(º _ ºノ)")]
    #[case(Verb::Unflip, "-table Thanks Obama", "┳━┳ノ(º _ ºノ)")]
    #[case(Verb::Flip, "", "(╯°□°)╯︵┻━┻")]
    #[case(Verb::Unflip, "", "┳━┳ノ(º _ ºノ)")]
    fn scenarios(#[case] verb: Verb, #[case] args: &str, #[case] expected: &str) {
        assert_eq!(render(verb, args), expected);
    }

    #[test]
    fn right_direction_mirrors_templates() {
        assert_eq!(render(Verb::Flip, "-table -right"), "┻━┻︵╰(°□°╰)");
        assert_eq!(render(Verb::Unflip, "-table -right"), "(ヽº _ º)ヽ┳━┳");
        assert_eq!(render(Verb::Flip, "-rage -right"), "┻━┻彡╰(ಠ益ಠ╰)");
    }

    #[test]
    fn oriented_face_follows_direction() {
        assert_eq!(render(Verb::Unflip, "-cool -table"), "┳━┳ノ(■_■¬ノ)");
        assert_eq!(render(Verb::Unflip, "-cool -table -right"), "(ヽ⌐■_■)ヽ┳━┳");
    }

    #[test]
    fn person_glyphs() {
        let cmd = ParsedCommand::new(Verb::Flip, FlippableItem::Person);
        assert_eq!(compose(Verb::Flip, &cmd), "(╯°□°)╯︵/(.□. \\)");
        let cmd = ParsedCommand::new(Verb::Unflip, FlippableItem::Person);
        assert_eq!(compose(Verb::Unflip, &cmd), "(*￣m￣)ノ(º _ ºノ)");
    }

    #[test]
    fn phrase_trailing_whitespace_is_trimmed() {
        let item = FlippableItem::Phrase("hi there   ".to_string());
        assert_eq!(render_item(Verb::Unflip, &item), "hi there");
        assert_eq!(render_item(Verb::Flip, &item), "ǝɹǝɥʇ ᴉɥ");
    }
}
