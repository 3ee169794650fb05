//! End-to-end build: read, filter, sort, write documents, write the package files.

use std::path::Path;

use serde::Serialize;
use tokio::fs;
use tracing::{error, info};
use uuid::Uuid;

use crate::catalog::SortedEntrySource;
use crate::config::BuildConfig;
use crate::error::{BuildError, BuildResult};
use crate::manifest::{PackageDescriptor, COPYRIGHT_FILE, COVER_FILE, MANIFEST_FILE};
use crate::pages::{cover_page, COPYRIGHT_PAGE};
use crate::reader::{read_catalog, ReadStats};
use crate::writer::PageWriter;

/// Summary of a finished build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub read: ReadStats,
    /// Entries dropped because they only restate another entry's inflection.
    pub filtered_out: usize,
    pub rendered: usize,
    /// Entries skipped for a blank headword or a render failure.
    pub skipped: usize,
    pub package: PackageDescriptor,
    /// Output writes that failed; the package is incomplete when non-empty.
    pub failures: Vec<String>,
}

impl BuildReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Builds the dictionary package with a fresh package identifier.
pub async fn build_dictionary(config: &BuildConfig) -> BuildResult<BuildReport> {
    build_dictionary_with_identifier(config, Uuid::new_v4()).await
}

/// Builds the dictionary package with the given package identifier.
///
/// Invalid configuration, an unusable output directory and an unreadable
/// input end the build with an error. Failed output writes are logged and
/// listed in the report; independent files are still written.
pub async fn build_dictionary_with_identifier(
    config: &BuildConfig,
    identifier: Uuid,
) -> BuildResult<BuildReport> {
    config.validate()?;
    prepare_output_dir(&config.output_dir).await?;

    info!(path = %config.definitions_path.display(), "Reading definitions");
    let (catalog, read) = read_catalog(config).await?;

    info!(entries = catalog.len(), "Filtering entries");
    let filtered = catalog.filter();
    let filtered_out = filtered.removed();

    info!(entries = filtered.len(), "Sorting entries");
    let sorted = filtered.sort();

    info!(entries = sorted.len(), dir = %config.output_dir.display(), "Creating documents");
    let mut writer = PageWriter::new(&config.output_dir, config.page_size, config.render)?;
    let mut failures = Vec::new();
    if let Err(e) = write_documents(&mut writer, sorted).await {
        error!(error = %e, "Stopped writing content documents");
        failures.push(e.to_string());
    }

    let package = PackageDescriptor::new(&config.title, &config.author, writer.documents_written())
        .with_identifier(identifier);

    let files = [
        (COVER_FILE, cover_page(&config.title, &config.author)),
        (COPYRIGHT_FILE, COPYRIGHT_PAGE.to_string()),
        (MANIFEST_FILE, package.to_opf()),
    ];
    for (name, contents) in files {
        if let Err(e) = write_output(&config.output_dir.join(name), &contents).await {
            error!(error = %e, "Failed to write package file");
            failures.push(e.to_string());
        }
    }

    info!(
        documents = package.documents,
        rendered = writer.entries_rendered(),
        skipped = writer.entries_skipped(),
        failures = failures.len(),
        "Build finished"
    );
    Ok(BuildReport {
        read,
        filtered_out,
        rendered: writer.entries_rendered(),
        skipped: writer.entries_skipped(),
        package,
        failures,
    })
}

/// Feeds every entry of `source` to the writer, then flushes the last page.
pub async fn write_documents(
    writer: &mut PageWriter,
    source: impl SortedEntrySource,
) -> BuildResult<usize> {
    for entry in source.into_sorted() {
        writer.add_entry(&entry).await?;
    }
    writer.close().await
}

/// Removes and recreates the output directory.
pub async fn prepare_output_dir(dir: &Path) -> BuildResult<()> {
    let dir_error = |source: std::io::Error| BuildError::OutputDirectory {
        path: dir.to_path_buf(),
        source,
    };
    match fs::remove_dir_all(dir).await {
        Ok(()) => info!(dir = %dir.display(), "Cleared output directory"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(dir_error(e)),
    }
    fs::create_dir_all(dir).await.map_err(dir_error)
}

async fn write_output(path: &Path, contents: &str) -> BuildResult<()> {
    fs::write(path, contents)
        .await
        .map_err(|source| BuildError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), "Wrote package file");
    Ok(())
}
