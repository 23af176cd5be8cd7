//! Diacritic transliteration.
//!
//! Maps Latin-script diacritic characters to ASCII-safe replacements so the
//! derived usernames survive the downstream enrollment system, which only
//! accepts ASCII identifiers. Characters outside the table pass through
//! unchanged, so the function is total over arbitrary Unicode input.
//!
//! Case policy: uppercase characters with a multi-letter replacement map to
//! a capitalized form (`Ä` -> `Ae`, `Ö` -> `Oe`, `Ü` -> `Ue`); single-letter
//! replacements carry the source case (`é` -> `e`, `É` -> `E`).
//!
//! Every replacement is plain ASCII and never a key of the table itself, so
//! a second pass over transliterated output is the identity.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// The supported diacritic inventory, grouped by base letter.
const DIACRITIC_PAIRS: &[(char, &str)] = &[
    // o / oe
    ('ö', "oe"),
    ('œ', "oe"),
    ('ó', "o"),
    ('ò', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ō', "o"),
    ('ø', "o"),
    ('ǒ', "o"),
    ('ȯ', "o"),
    ('Ö', "Oe"),
    ('Œ', "Oe"),
    ('Ó', "O"),
    ('Ò', "O"),
    ('Ô', "O"),
    ('Õ', "O"),
    ('Ō', "O"),
    ('Ø', "O"),
    ('Ǒ', "O"),
    ('Ȯ', "O"),
    // a
    ('á', "a"),
    ('à', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('ä', "ae"),
    ('ā', "a"),
    ('å', "a"),
    ('ą', "a"),
    ('ǎ', "a"),
    ('ȧ', "a"),
    ('Á', "A"),
    ('À', "A"),
    ('Â', "A"),
    ('Ã', "A"),
    ('Ä', "Ae"),
    ('Ā', "A"),
    ('Å', "A"),
    ('Ą', "A"),
    ('Ǎ', "A"),
    ('Ȧ', "A"),
    // u
    ('ú', "u"),
    ('ù', "u"),
    ('û', "u"),
    ('ü', "ue"),
    ('ū', "u"),
    ('ů', "u"),
    ('ǔ', "u"),
    ('Ú', "U"),
    ('Ù', "U"),
    ('Û', "U"),
    ('Ü', "Ue"),
    ('Ū', "U"),
    ('Ů', "U"),
    ('Ǔ', "U"),
    // e
    ('é', "e"),
    ('è', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ē', "e"),
    ('ė', "e"),
    ('ę', "e"),
    ('É', "E"),
    ('È', "E"),
    ('Ê', "E"),
    ('Ë', "E"),
    ('Ē', "E"),
    ('Ė', "E"),
    ('Ę', "E"),
    // ß
    ('ß', "ss"),
    // i
    ('í', "i"),
    ('ì', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ī', "i"),
    ('į', "i"),
    ('ǐ', "i"),
    ('Í', "I"),
    ('Ì', "I"),
    ('Î', "I"),
    ('Ï', "I"),
    ('Ī', "I"),
    ('Į', "I"),
    ('Ǐ', "I"),
    // c
    ('ç', "c"),
    ('ć', "c"),
    ('č', "c"),
    ('Ç', "C"),
    ('Ć', "C"),
    ('Č', "C"),
    // n
    ('ñ', "n"),
    ('ń', "n"),
    ('ň', "n"),
    ('Ñ', "N"),
    ('Ń', "N"),
    ('Ň', "N"),
    // y
    ('ý', "y"),
    ('ÿ', "y"),
    ('Ý', "Y"),
    ('Ÿ', "Y"),
];

static DIACRITIC_MAP: LazyLock<BTreeMap<char, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    for &(source, replacement) in DIACRITIC_PAIRS {
        let previous = map.insert(source, replacement);
        assert!(
            previous.is_none(),
            "duplicate diacritic mapping for '{source}'"
        );
    }
    map
});

/// Replace every mapped diacritic character with its ASCII equivalent.
///
/// Unmapped characters, including characters outside the Latin script, pass
/// through verbatim.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match DIACRITIC_MAP.get(&ch) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

/// The supported substitutions in table order, for display surfaces.
pub fn diacritic_mappings() -> impl Iterator<Item = (char, &'static str)> {
    DIACRITIC_PAIRS.iter().copied()
}
