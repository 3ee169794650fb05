//! Streaming reader for line-delimited definition dumps.

use serde::Serialize;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use wikidict_model::Entry;

use crate::catalog::Catalog;
use crate::config::BuildConfig;
use crate::error::{BuildError, BuildResult};

/// Counters collected while reading a dump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReadStats {
    pub lines: usize,
    pub malformed: usize,
    pub rejected_language: usize,
    pub accepted: usize,
}

/// Reads every record of the definitions file into a [`Catalog`].
///
/// Lines are read one at a time; only parsed entries are kept. Malformed
/// lines are logged and skipped. Failing to open or read the file is fatal.
pub async fn read_catalog(config: &BuildConfig) -> BuildResult<(Catalog, ReadStats)> {
    let path = config.definitions_path.as_path();
    let input_error = |source: std::io::Error| BuildError::Input {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).await.map_err(input_error)?;
    let mut reader = BufReader::new(file);
    let mut catalog = Catalog::new();
    let mut stats = ReadStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).await.map_err(input_error)?;
        if n == 0 {
            break;
        }
        stats.lines += 1;

        match parse_line(&buf, stats.lines) {
            Ok(None) => {}
            Ok(Some(entry)) => {
                if !config.accepts_language(entry.lang_code.as_deref()) {
                    debug!(word = %entry.word, lang = ?entry.lang_code, "Rejected by language filter");
                    stats.rejected_language += 1;
                    continue;
                }
                stats.accepted += 1;
                catalog.push(entry);
            }
            Err(e) => {
                warn!(error = %e, "Skipping line");
                stats.malformed += 1;
            }
        }
    }

    info!(
        path = %path.display(),
        lines = stats.lines,
        accepted = stats.accepted,
        malformed = stats.malformed,
        inflections = catalog.inflection_count(),
        "Finished reading definitions"
    );
    Ok((catalog, stats))
}

/// Parses one raw line. Blank lines yield `Ok(None)`.
fn parse_line(raw: &[u8], line: usize) -> BuildResult<Option<Entry>> {
    let malformed = |source: wikidict_model::Error| BuildError::MalformedRecord { line, source };
    let text = std::str::from_utf8(raw)
        .map_err(|e| malformed(e.into()))?
        .trim();
    if text.is_empty() {
        return Ok(None);
    }
    Entry::from_json_line(text).map(Some).map_err(malformed)
}
