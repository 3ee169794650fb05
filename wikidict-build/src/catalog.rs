//! In-memory entry catalog: inflection-form deduplication and ordering.
//!
//! The catalog moves through three states:
//! - [`Catalog`] collects parsed entries together with the inflection index
//! - [`FilteredEntries`] has dropped entries that only restate another
//!   entry's inflected form; the index is released here
//! - [`SortedEntries`] is ordered by headword and feeds the writer through
//!   [`SortedEntrySource`]

use std::collections::HashSet;

use wikidict_model::Entry;

/// A source of entries in final headword order.
///
/// The in-memory [`SortedEntries`] is the only implementation; a disk-backed
/// external sort can stand in without changing the writer.
pub trait SortedEntrySource {
    /// Number of entries the source yields.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the source, yielding entries in ascending headword order.
    fn into_sorted(self) -> impl Iterator<Item = Entry>;
}

/// Parsed entries plus every inflected form seen across them.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
    inflections: HashSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry and indexes its inflected forms.
    pub fn push(&mut self, entry: Entry) {
        self.inflections
            .extend(entry.inflected_forms().map(str::to_owned));
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true when `form` is an inflected form of some entry.
    pub fn is_inflection(&self, form: &str) -> bool {
        self.inflections.contains(form)
    }

    /// Number of distinct inflected forms indexed.
    pub fn inflection_count(&self) -> usize {
        self.inflections.len()
    }

    /// Keeps an entry when it has forms of its own or its headword is not
    /// an inflected form of another entry.
    pub fn is_eligible(&self, entry: &Entry) -> bool {
        is_eligible(entry, &self.inflections)
    }

    /// Drops ineligible entries and releases the inflection index.
    pub fn filter(self) -> FilteredEntries {
        let Self {
            entries,
            inflections,
        } = self;
        let before = entries.len();
        let entries: Vec<Entry> = entries
            .into_iter()
            .filter(|e| is_eligible(e, &inflections))
            .collect();
        FilteredEntries {
            removed: before - entries.len(),
            entries,
        }
    }
}

fn is_eligible(entry: &Entry, inflections: &HashSet<String>) -> bool {
    entry.has_forms() || !inflections.contains(&entry.word)
}

/// Entries that survived the inflection filter, in input order.
#[derive(Debug)]
pub struct FilteredEntries {
    entries: Vec<Entry>,
    removed: usize,
}

impl FilteredEntries {
    /// Number of entries dropped by the filter.
    pub fn removed(&self) -> usize {
        self.removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorts by headword. The sort is stable, so equal headwords keep input order.
    pub fn sort(mut self) -> SortedEntries {
        self.entries.sort_by(|a, b| a.word.cmp(&b.word));
        SortedEntries {
            entries: self.entries,
        }
    }
}

/// Entries in ascending headword order.
#[derive(Debug)]
pub struct SortedEntries {
    entries: Vec<Entry>,
}

impl SortedEntries {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl SortedEntrySource for SortedEntries {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn into_sorted(self) -> impl Iterator<Item = Entry> {
        self.entries.into_iter()
    }
}
