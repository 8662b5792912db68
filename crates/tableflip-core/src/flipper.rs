//! Upside-down character substitution.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    // Characters that already read the same upside down (o, s, x, z, l, O, S)
    // are left out and pass through unchanged.
    static ref UPSIDE_DOWN: HashMap<char, char> = [
        // Lowercase
        ('a', 'ɐ'), ('b', 'q'), ('c', 'ɔ'), ('d', 'p'), ('e', 'ǝ'),
        ('f', 'ɟ'), ('g', 'ƃ'), ('h', 'ɥ'), ('i', 'ᴉ'), ('j', 'ɾ'),
        ('k', 'ʞ'), ('m', 'ɯ'), ('n', 'u'), ('p', 'd'), ('q', 'b'),
        ('r', 'ɹ'), ('t', 'ʇ'), ('u', 'n'), ('v', 'ʌ'), ('w', 'ʍ'),
        ('y', 'ʎ'),
        // Uppercase with a distinct glyph; the rest fall back to lowercase
        ('A', '∀'), ('C', 'Ɔ'), ('E', 'Ǝ'), ('F', 'Ⅎ'), ('G', 'פ'),
        ('J', 'ſ'), ('L', '˥'), ('M', 'W'), ('P', 'Ԁ'), ('T', '┴'),
        ('U', '∩'), ('V', 'Λ'), ('W', 'M'), ('Y', '⅄'),
        // Digits
        ('1', 'Ɩ'), ('2', 'ᄅ'), ('3', 'Ɛ'), ('4', 'ㄣ'), ('5', 'ϛ'),
        ('6', '9'), ('7', 'ㄥ'), ('9', '6'),
        // Punctuation
        ('.', '˙'), (',', '\''), ('\'', ','), ('"', '„'), ('`', ','),
        ('?', '¿'), ('!', '¡'), ('&', '⅋'), ('_', '‾'), (';', '؛'),
        ('[', ']'), (']', '['), ('(', ')'), (')', '('),
        ('{', '}'), ('}', '{'), ('<', '>'), ('>', '<'),
    ]
    .into_iter()
    .collect();
}

/// Map a single character to its upside-down counterpart.
///
/// Looks up the exact character first, then its lowercase form. Characters
/// without an entry are returned unchanged.
pub fn flip_char(c: char) -> char {
    if let Some(&flipped) = UPSIDE_DOWN.get(&c) {
        return flipped;
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => UPSIDE_DOWN.get(&l).copied().unwrap_or(c),
        _ => c,
    }
}

/// Turn a string upside down: substitute every character and reverse.
///
/// Total over all inputs; the output has as many `char`s as the input.
///
/// # Examples
/// ```
/// use tableflip_core::flip_text;
/// assert_eq!(flip_text("Thanks Obama"), "ɐɯɐqO sʞuɐɥ┴");
/// ```
pub fn flip_text(input: &str) -> String {
    input.chars().rev().map(flip_char).collect()
}
