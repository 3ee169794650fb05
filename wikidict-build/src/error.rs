//! Error types for the build pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for build operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that can occur while building a dictionary package.
///
/// `MalformedRecord` and `EntryRender` are recovered where they occur: the
/// offending line or entry is logged and skipped. The remaining variants end
/// the step that raised them.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The build configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The definitions file cannot be opened or read.
    #[error("cannot read definitions from {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the definitions file is not a valid record.
    #[error("malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: wikidict_model::Error,
    },

    /// An entry could not be rendered.
    #[error("cannot render \"{word}\": {source}")]
    EntryRender {
        word: String,
        #[source]
        source: wikidict_render::RenderError,
    },

    /// The output directory cannot be cleared or created.
    #[error("cannot prepare output directory {}: {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document, static page or the manifest cannot be written.
    #[error("cannot write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A markup post-processing pattern failed to compile.
    #[error("invalid markup pattern: {0}")]
    Pattern(#[from] regex_lite::Error),
}
