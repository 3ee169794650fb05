//! Dictionary package builder for wikidict.
//!
//! Converts a line-delimited JSON dump of dictionary entries into an
//! e-reader dictionary source tree:
//! - `dictionary.opf` — package manifest
//! - `cover.html`, `copyright.html` — static pages
//! - `content_1.html` … `content_N.html` — paginated entries
//!
//! # Pipeline
//!
//! 1. [`read_catalog`] streams the dump and indexes every inflected form
//! 2. [`Catalog::filter`] drops entries whose headword is only another
//!    entry's inflected form, [`FilteredEntries::sort`] orders by headword
//! 3. [`PageWriter`] renders each entry and writes a document per page
//! 4. [`PackageDescriptor`] describes the result in the manifest
//!
//! The pipeline is sequential; documents are numbered in the order they are
//! written.

mod catalog;
mod config;
mod error;
mod manifest;
mod normalize;
mod pages;
mod pipeline;
mod reader;
mod writer;

pub use catalog::{Catalog, FilteredEntries, SortedEntries, SortedEntrySource};
pub use config::{
    BuildConfig, DEFAULT_AUTHOR, DEFAULT_OUTPUT_DIR, DEFAULT_PAGE_SIZE, DEFAULT_TITLE,
};
pub use error::{BuildError, BuildResult};
pub use manifest::{PackageDescriptor, COPYRIGHT_FILE, COVER_FILE, MANIFEST_FILE};
pub use normalize::Normalizer;
pub use pages::{cover_page, COPYRIGHT_PAGE, DOCUMENT_FOOTER, DOCUMENT_HEADER};
pub use pipeline::{
    build_dictionary, build_dictionary_with_identifier, prepare_output_dir, write_documents,
    BuildReport,
};
pub use reader::{read_catalog, ReadStats};
pub use writer::{content_file_name, PageWriter};
