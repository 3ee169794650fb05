//! Entry data model for wikidict.
//!
//! This crate defines the shape of one line of a wiki dictionary dump:
//! - `Entry` — one lexical record (headword, part of speech, senses, forms)
//! - `Sense` — an ordered list of glosses, from general to specific
//! - `Form`, `Translation`, `Sound`, `Synonym` — the supporting records
//! - the part-of-speech abbreviation table used for display
//!
//! Parsing is lenient about optional fields and strict about the headword:
//! a record without `word` is rejected as malformed.

mod entry;
mod pos;
mod sense;

pub use entry::{Entry, Form, Sound, Synonym, Translation};
pub use pos::{abbreviate, POS_ABBREVIATIONS};
pub use sense::Sense;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a record.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("record is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}
