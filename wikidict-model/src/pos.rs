//! Part-of-speech display abbreviations.

/// Known part-of-speech tags and their short display forms.
pub const POS_ABBREVIATIONS: [(&str, &str); 29] = [
    ("noun", "n."),
    ("verb", "v."),
    ("adj", "adj."),
    ("adv", "adv."),
    ("pron", "pron."),
    ("prep", "prep."),
    ("conj", "conj."),
    ("intj", "interj."),
    ("num", "num."),
    ("article", "art."),
    ("det", "det."),
    ("particle", "part."),
    ("prefix", "pref."),
    ("suffix", "suf."),
    ("affix", "aff."),
    ("infix", "inf."),
    ("interfix", "interf."),
    ("circumfix", "circumf."),
    ("phrase", "phr."),
    ("prep_phrase", "prep. phr."),
    ("proverb", "prov."),
    ("name", "prop. n."),
    ("abbrev", "abbr."),
    ("symbol", "sym."),
    ("character", "char."),
    ("contraction", "contr."),
    ("postp", "postp."),
    ("punct", "punct."),
    ("romanization", "rom."),
];

/// Returns the display form of a part-of-speech tag.
///
/// Unknown tags are returned unchanged.
#[must_use]
pub fn abbreviate(tag: &str) -> &str {
    POS_ABBREVIATIONS
        .iter()
        .find(|(known, _)| *known == tag)
        .map(|(_, short)| *short)
        .unwrap_or(tag)
}
