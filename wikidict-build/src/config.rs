//! Build configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use wikidict_render::RenderOptions;

use crate::error::{BuildError, BuildResult};

pub const DEFAULT_TITLE: &str = "Dictionary";
pub const DEFAULT_AUTHOR: &str = "Anonymous";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Entries per content document.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Everything a build needs to know.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Line-delimited JSON definitions file.
    pub definitions_path: PathBuf,
    pub title: String,
    pub author: String,
    /// Directory that is wiped and regenerated on every build.
    pub output_dir: PathBuf,
    /// Number of entries per content document.
    pub page_size: usize,
    /// Accepted language codes. Empty accepts every record.
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub render: RenderOptions,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            definitions_path: PathBuf::new(),
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            page_size: DEFAULT_PAGE_SIZE,
            languages: Vec::new(),
            render: RenderOptions::default(),
        }
    }
}

impl BuildConfig {
    /// Creates a configuration with defaults for everything but the input.
    pub fn new(definitions_path: impl Into<PathBuf>) -> Self {
        Self {
            definitions_path: definitions_path.into(),
            ..Default::default()
        }
    }

    /// Validates required fields and limits.
    pub fn validate(&self) -> BuildResult<()> {
        if self.definitions_path.as_os_str().is_empty() {
            return Err(BuildError::InvalidConfig(
                "definitions path is required".into(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(BuildError::InvalidConfig("output directory is required".into()));
        }
        if self.page_size == 0 {
            return Err(BuildError::InvalidConfig(
                "page size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Returns true when `lang_code` passes the language filter.
    pub fn accepts_language(&self, lang_code: Option<&str>) -> bool {
        if self.languages.is_empty() {
            return true;
        }
        lang_code.is_some_and(|code| self.languages.iter().any(|l| l == code))
    }
}
