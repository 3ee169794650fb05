//! Word senses as ordered gloss lists.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// One meaning of an entry: glosses ordered from general to specific.
///
/// A gloss may be absent (`null` in the dump). Absent glosses are kept so
/// that the positions of the remaining glosses do not shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSense", into = "Vec<Option<String>>")]
pub struct Sense {
    glosses: Vec<Option<String>>,
}

/// Dumps ship senses either as bare gloss arrays or as objects with a
/// `glosses` field. Anything else reads as a sense without glosses.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSense {
    Glosses(Vec<Option<String>>),
    Object {
        #[serde(default)]
        glosses: Option<Vec<Option<String>>>,
    },
    Other(IgnoredAny),
}

impl From<RawSense> for Sense {
    fn from(raw: RawSense) -> Self {
        let glosses = match raw {
            RawSense::Glosses(glosses) => glosses,
            RawSense::Object { glosses } => glosses.unwrap_or_default(),
            RawSense::Other(_) => Vec::new(),
        };
        Self { glosses }
    }
}

impl From<Sense> for Vec<Option<String>> {
    fn from(sense: Sense) -> Self {
        sense.glosses
    }
}

impl Sense {
    /// Creates a sense from present glosses.
    pub fn new<I, S>(glosses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            glosses: glosses.into_iter().map(|g| Some(g.into())).collect(),
        }
    }

    /// Creates a sense that may contain absent glosses.
    pub fn from_optional(glosses: Vec<Option<String>>) -> Self {
        Self { glosses }
    }

    /// Returns the gloss at `depth`, or `None` when it is absent or out of range.
    #[must_use]
    pub fn gloss(&self, depth: usize) -> Option<&str> {
        self.glosses.get(depth).and_then(|g| g.as_deref())
    }

    /// Number of gloss slots, absent ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glosses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glosses.is_empty()
    }

    pub fn glosses(&self) -> &[Option<String>] {
        &self.glosses
    }
}
