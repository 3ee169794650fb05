//! Post-processing of finished content documents.
//!
//! Two passes run in order:
//! 1. reformat: void elements are closed (`<br>` becomes `<br/>`) and
//!    whitespace runs collapse to one space, except inside quoted attribute
//!    values, which carry lookup keys
//! 2. compact: comments and whitespace between tags are removed

use regex_lite::{Captures, Regex};

use crate::error::BuildResult;

/// Compiled patterns for [`Normalizer::normalize`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    void_element: Regex,
    tag_or_space: Regex,
    quoted_or_space: Regex,
    comment: Regex,
    between_tags: Regex,
}

impl Normalizer {
    pub fn new() -> BuildResult<Self> {
        Ok(Self {
            void_element: Regex::new(r"<(br|hr|img|input|link|meta)\b([^>]*?)\s*/?>")?,
            tag_or_space: Regex::new(r"<[^>]*>|\s+")?,
            quoted_or_space: Regex::new(r#""[^"]*"|\s+"#)?,
            comment: Regex::new(r"(?s)<!--.*?-->")?,
            between_tags: Regex::new(r">\s+<")?,
        })
    }

    /// Reformats, then compacts a document.
    pub fn normalize(&self, text: &str) -> String {
        self.compact(&self.reformat(text))
    }

    fn reformat(&self, text: &str) -> String {
        let closed = self.void_element.replace_all(text, "<$1$2/>");
        self.tag_or_space
            .replace_all(&closed, |caps: &Captures<'_>| {
                let matched = &caps[0];
                if matched.starts_with('<') {
                    self.quoted_or_space
                        .replace_all(matched, |inner: &Captures<'_>| collapse(&inner[0]))
                        .into_owned()
                } else {
                    " ".to_string()
                }
            })
            .into_owned()
    }

    fn compact(&self, text: &str) -> String {
        let uncommented = self.comment.replace_all(text, "");
        self.between_tags
            .replace_all(&uncommented, "><")
            .trim()
            .to_string()
    }
}

/// Quoted values are kept verbatim; anything else is a whitespace run.
fn collapse(matched: &str) -> String {
    if matched.starts_with('"') {
        matched.to_string()
    } else {
        " ".to_string()
    }
}
