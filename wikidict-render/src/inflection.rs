//! Inflection lists: the lookup forms indexed under a headword.

use wikidict_model::Entry;

/// Most inflection values the e-reader index accepts for one headword.
pub const MAX_INFLECTIONS: usize = 254;

/// Returns true when every character is printable ASCII or Latin-1/Latin Extended.
///
/// Translations in other scripts are left out of the lookup index.
#[must_use]
pub fn is_latin_compatible(s: &str) -> bool {
    s.chars()
        .all(|c| matches!(c, '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{24F}'))
}

/// Collects the inflection list for an entry.
///
/// Forms come first, then Latin-compatible translations, capped at
/// [`MAX_INFLECTIONS`] items.
pub fn inflection_list(entry: &Entry) -> Vec<&str> {
    let translations = entry
        .translations
        .iter()
        .map(|t| t.word.as_str())
        .filter(|w| !w.is_empty() && is_latin_compatible(w));

    entry
        .inflected_forms()
        .chain(translations)
        .take(MAX_INFLECTIONS)
        .collect()
}
