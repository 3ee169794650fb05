//! Dictionary entries as they appear in a line-delimited dump.

use serde::{Deserialize, Deserializer, Serialize};

use crate::sense::Sense;

/// One lexical record.
///
/// Entries have no identity beyond `word`. Two entries with the same word are
/// independent and are rendered independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Primary surface string (headword).
    pub word: String,
    /// Short language identifier (e.g., "en").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang_code: Option<String>,
    /// Language display name (e.g., "English").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Part-of-speech tag (e.g., "verb").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(default, deserialize_with = "non_empty_senses")]
    pub senses: Vec<Sense>,
    #[serde(default, deserialize_with = "present_items")]
    pub forms: Vec<Form>,
    #[serde(default, deserialize_with = "named_translations")]
    pub translations: Vec<Translation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etymology_text: Option<String>,
    #[serde(default, deserialize_with = "present_items")]
    pub sounds: Vec<Sound>,
    #[serde(default, deserialize_with = "present_items")]
    pub synonyms: Vec<Synonym>,
}

/// An inflected form of the headword with its grammatical tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default, deserialize_with = "null_as_default")]
    pub form: String,
    #[serde(default, deserialize_with = "present_items")]
    pub tags: Vec<String>,
}

/// A cross-language equivalent of the headword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub word: String,
    pub lang_code: Option<String>,
}

/// A phonetic transcription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sound {
    #[serde(default)]
    pub ipa: Option<String>,
    #[serde(default, deserialize_with = "present_items")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    #[serde(default, deserialize_with = "null_as_default")]
    pub word: String,
}

/// Translation as found in dumps: older exports use `code`, newer ones `lang_code`.
#[derive(Deserialize)]
struct RawTranslation {
    #[serde(default)]
    word: Option<String>,
    #[serde(default)]
    lang_code: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A `null` list is empty and `null` items are dropped.
fn present_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Vec<Option<T>> = null_as_default(deserializer)?;
    Ok(items.into_iter().flatten().collect())
}

/// Senses without any gloss carry no meaning and are dropped.
fn non_empty_senses<'de, D>(deserializer: D) -> Result<Vec<Sense>, D::Error>
where
    D: Deserializer<'de>,
{
    let senses: Vec<Sense> = present_items(deserializer)?;
    Ok(senses.into_iter().filter(|s| !s.is_empty()).collect())
}

fn named_translations<'de, D>(deserializer: D) -> Result<Vec<Translation>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<RawTranslation> = present_items(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|t| {
            let word = t.word.filter(|w| !w.is_empty())?;
            Some(Translation {
                word,
                lang_code: t.lang_code.or(t.code),
            })
        })
        .collect())
}

impl Entry {
    /// Creates an entry with only a headword.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    /// Parses one line of the dump.
    pub fn from_json_line(line: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    /// Returns true when the entry declares inflected forms of its own.
    #[must_use]
    pub fn has_forms(&self) -> bool {
        !self.forms.is_empty()
    }

    /// Non-empty inflected form strings, in record order.
    pub fn inflected_forms(&self) -> impl Iterator<Item = &str> {
        self.forms
            .iter()
            .map(|f| f.form.as_str())
            .filter(|f| !f.is_empty())
    }

    /// Returns true when the headword is blank after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.word.trim().is_empty()
    }
}
