//! Entry renderer for wikidict.
//!
//! Turns one [`Entry`] into a self-contained e-reader dictionary fragment:
//!
//! ```text
//! <idx:entry name="default" scriptable="yes" spell="yes">
//!   <dt><idx:orth value="run">run<idx:infl><idx:iform value="running"/></idx:infl></idx:orth></dt>
//!   <dd><i>v.</i> <ol><li>move<ol><li>quickly</li><li>on foot</li></ol></li></ol></dd>
//! </idx:entry>
//! ```
//!
//! Rendering is a pure function of the entry and the options. All text is
//! escaped, so every fragment is well-formed on its own.

mod escape;
mod inflection;
mod outline;

pub use escape::{escape_attr, escape_text};
pub use inflection::{inflection_list, is_latin_compatible, MAX_INFLECTIONS};
pub use outline::{build_outline, write_outline, OutlineNode, MAX_OUTLINE_DEPTH};

use serde::{Deserialize, Serialize};
use wikidict_model::{abbreviate, Entry};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering an entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("sense outline deeper than {depth} levels")]
    OutlineTooDeep { depth: usize },
}

/// Optional parts of an entry that are left out unless requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Show phonetic transcriptions next to the headword.
    #[serde(default)]
    pub pronunciations: bool,
    /// List inflected forms with their grammatical tags after the etymology.
    #[serde(default)]
    pub forms: bool,
    /// Append the synonym list after the etymology.
    #[serde(default)]
    pub synonyms: bool,
}

const ENTRY_OPEN: &str = r#"<idx:entry name="default" scriptable="yes" spell="yes">"#;
const ENTRY_CLOSE: &str = "</idx:entry>";

/// Renders an entry as a markup fragment.
pub fn render_entry(entry: &Entry, options: &RenderOptions) -> Result<String> {
    let outline = build_outline(&entry.senses)?;
    let mut out = String::with_capacity(256);

    out.push_str(ENTRY_OPEN);

    // Headword and lookup forms
    out.push_str("<dt><idx:orth value=\"");
    out.push_str(&escape_attr(&entry.word));
    out.push_str("\">");
    out.push_str(&escape_text(&entry.word));
    let inflections = inflection_list(entry);
    if !inflections.is_empty() {
        out.push_str("<idx:infl>");
        for form in inflections {
            out.push_str("<idx:iform value=\"");
            out.push_str(&escape_attr(form));
            out.push_str("\"/>");
        }
        out.push_str("</idx:infl>");
    }
    out.push_str("</idx:orth>");
    if options.pronunciations {
        write_pronunciations(&mut out, entry);
    }
    out.push_str("</dt>");

    out.push_str("<dd>");
    if let Some(pos) = entry.pos.as_deref().filter(|p| !p.is_empty()) {
        out.push_str("<i>");
        out.push_str(&escape_text(abbreviate(pos)));
        out.push_str("</i> ");
    }
    write_outline(&mut out, &outline);
    if let Some(etymology) = entry.etymology_text.as_deref().filter(|e| !e.trim().is_empty()) {
        out.push_str("<p><i>Etymology</i>: ");
        out.push_str(&escape_text(etymology));
        out.push_str("</p>");
    }
    if options.forms {
        write_forms(&mut out, entry);
    }
    if options.synonyms {
        write_synonyms(&mut out, entry);
    }
    out.push_str("</dd>");

    out.push_str(ENTRY_CLOSE);
    Ok(out)
}

fn write_pronunciations(out: &mut String, entry: &Entry) {
    let items: Vec<String> = entry
        .sounds
        .iter()
        .filter_map(|sound| {
            let ipa = sound.ipa.as_deref().filter(|i| !i.is_empty())?;
            let ipa = escape_text(ipa);
            if sound.tags.is_empty() {
                Some(ipa.into_owned())
            } else {
                Some(format!("<i>{}</i> {ipa}", escape_text(&sound.tags.join(", "))))
            }
        })
        .collect();
    if items.is_empty() {
        return;
    }
    out.push_str(" <phonetic>");
    out.push_str(&items.join(", "));
    out.push_str("</phonetic>");
}

fn write_forms(out: &mut String, entry: &Entry) {
    let items: Vec<String> = entry
        .forms
        .iter()
        .filter(|f| !f.form.is_empty())
        .map(|f| {
            let form = escape_text(&f.form);
            if f.tags.is_empty() {
                form.into_owned()
            } else {
                format!("{form} ({})", escape_text(&f.tags.join(", ")))
            }
        })
        .collect();
    if items.is_empty() {
        return;
    }
    out.push_str("<p><i>Forms</i>: ");
    out.push_str(&items.join(", "));
    out.push_str("</p>");
}

fn write_synonyms(out: &mut String, entry: &Entry) {
    let words: Vec<&str> = entry
        .synonyms
        .iter()
        .map(|s| s.word.as_str())
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        return;
    }
    out.push_str("<p><i>Synonyms</i>: ");
    out.push_str(&escape_text(&words.join(", ")));
    out.push_str("</p>");
}
