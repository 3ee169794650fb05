//! Paginated writer for content documents.
//!
//! Rendered entries accumulate in a buffer that always starts with the
//! document header. When the buffer holds `page_size` entries it is closed,
//! normalized and written as `content_{n}.html`, numbered from 1 in flush
//! order. Each document is complete before the next one starts.

use std::path::PathBuf;

use tokio::fs;
use tracing::{debug, info, warn};
use wikidict_model::Entry;
use wikidict_render::{render_entry, RenderOptions};

use crate::error::{BuildError, BuildResult};
use crate::normalize::Normalizer;
use crate::pages::{DOCUMENT_FOOTER, DOCUMENT_HEADER};

/// File name of the `n`-th content document (1-based).
pub fn content_file_name(n: usize) -> String {
    format!("content_{n}.html")
}

/// The document being filled.
#[derive(Debug)]
struct DocumentBuffer {
    text: String,
    entries: usize,
}

impl DocumentBuffer {
    fn new() -> Self {
        Self {
            text: String::from(DOCUMENT_HEADER),
            entries: 0,
        }
    }
}

/// Writes rendered entries into numbered, self-contained documents.
#[derive(Debug)]
pub struct PageWriter {
    dir: PathBuf,
    page_size: usize,
    options: RenderOptions,
    normalizer: Normalizer,
    buffer: DocumentBuffer,
    documents: usize,
    rendered: usize,
    skipped: usize,
}

impl PageWriter {
    /// Creates a writer for an existing output directory.
    pub fn new(
        dir: impl Into<PathBuf>,
        page_size: usize,
        options: RenderOptions,
    ) -> BuildResult<Self> {
        if page_size == 0 {
            return Err(BuildError::InvalidConfig(
                "page size must be at least 1".into(),
            ));
        }
        Ok(Self {
            dir: dir.into(),
            page_size,
            options,
            normalizer: Normalizer::new()?,
            buffer: DocumentBuffer::new(),
            documents: 0,
            rendered: 0,
            skipped: 0,
        })
    }

    /// Renders and buffers one entry.
    ///
    /// Entries with a blank headword and entries that fail to render are
    /// skipped; only write failures are returned.
    pub async fn add_entry(&mut self, entry: &Entry) -> BuildResult<()> {
        if entry.is_blank() {
            debug!("Skipping entry with blank headword");
            self.skipped += 1;
            return Ok(());
        }
        debug!(word = %entry.word, "Adding word");
        match render_entry(entry, &self.options) {
            Ok(fragment) => {
                self.rendered += 1;
                self.append(&fragment).await
            }
            Err(source) => {
                let err = BuildError::EntryRender {
                    word: entry.word.clone(),
                    source,
                };
                warn!(error = %err, "Skipping entry");
                self.skipped += 1;
                Ok(())
            }
        }
    }

    /// Appends a rendered fragment, flushing when the page is full.
    pub async fn append(&mut self, fragment: &str) -> BuildResult<()> {
        self.buffer.text.push_str(fragment);
        self.buffer.text.push('\n');
        self.buffer.entries += 1;
        if self.buffer.entries >= self.page_size {
            self.flush().await?;
        }
        Ok(())
    }

    /// Closes and writes the current buffer as the next document.
    ///
    /// Returns the written path, or `None` when the buffer holds no entries.
    pub async fn flush(&mut self) -> BuildResult<Option<PathBuf>> {
        if self.buffer.entries == 0 {
            return Ok(None);
        }
        let buffer = std::mem::replace(&mut self.buffer, DocumentBuffer::new());
        let mut text = buffer.text;
        text.push_str(DOCUMENT_FOOTER);
        let document = self.normalizer.normalize(&text);

        let number = self.documents + 1;
        let path = self.dir.join(content_file_name(number));
        fs::write(&path, document)
            .await
            .map_err(|source| BuildError::OutputWrite {
                path: path.clone(),
                source,
            })?;
        self.documents = number;
        info!(path = %path.display(), entries = buffer.entries, "Wrote content document");
        Ok(Some(path))
    }

    /// Flushes any partial page and returns the number of documents written.
    pub async fn close(&mut self) -> BuildResult<usize> {
        self.flush().await?;
        Ok(self.documents)
    }

    /// Documents written so far.
    pub fn documents_written(&self) -> usize {
        self.documents
    }

    /// Entries rendered into documents (including the buffered ones).
    pub fn entries_rendered(&self) -> usize {
        self.rendered
    }

    /// Entries skipped for a blank headword or a render failure.
    pub fn entries_skipped(&self) -> usize {
        self.skipped
    }

    /// Entries waiting in the current buffer.
    pub fn buffered(&self) -> usize {
        self.buffer.entries
    }
}
