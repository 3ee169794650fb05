use std::path::PathBuf;

use tempfile::TempDir;
use wikidict_build::{read_catalog, BuildConfig, BuildError};

fn write_input(dir: &TempDir, contents: &[u8]) -> PathBuf {
    let path = dir.path().join("defs.jsonl");
    std::fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn reads_records_and_indexes_forms() {
    let dir = TempDir::new().unwrap();
    let path = write_input(
        &dir,
        br#"{"word":"run","forms":[{"form":"ran"},{"form":"running"}]}
{"word":"ran"}
{"word":"cat","forms":[{"form":"cats"}]}
"#,
    );

    let (catalog, stats) = read_catalog(&BuildConfig::new(path)).await.unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(stats.lines, 3);
    assert_eq!(stats.accepted, 3);
    assert_eq!(stats.malformed, 0);
    assert_eq!(catalog.inflection_count(), 3);
    assert!(catalog.is_inflection("ran"));
    assert!(catalog.is_inflection("cats"));
    assert!(!catalog.is_inflection("run"));
}

#[tokio::test]
async fn malformed_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    let mut input = Vec::new();
    input.extend_from_slice(b"{\"word\":\"a\"}\n");
    input.extend_from_slice(b"not json at all\n");
    input.extend_from_slice(b"{\"pos\":\"noun\"}\n");
    input.extend_from_slice(b"\xff\xfe{\"word\":\"bad bytes\"}\n");
    input.extend_from_slice(b"\n   \n");
    input.extend_from_slice(b"{\"word\":\"b\"}");
    let path = write_input(&dir, &input);

    let (catalog, stats) = read_catalog(&BuildConfig::new(path)).await.unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(stats.lines, 7);
    assert_eq!(stats.malformed, 3);
    assert_eq!(stats.accepted, 2);
}

#[tokio::test]
async fn crlf_line_endings() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, b"{\"word\":\"a\"}\r\n{\"word\":\"b\"}\r\n");
    let (catalog, stats) = read_catalog(&BuildConfig::new(path)).await.unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(stats.malformed, 0);
}

#[tokio::test]
async fn language_filter_rejects_before_indexing() {
    let dir = TempDir::new().unwrap();
    let path = write_input(
        &dir,
        br#"{"word":"go","lang_code":"en","forms":[{"form":"went"}]}
{"word":"ir","lang_code":"es","forms":[{"form":"fue"}]}
{"word":"nolang"}
"#,
    );
    let config = BuildConfig {
        languages: vec!["en".into()],
        ..BuildConfig::new(path)
    };

    let (catalog, stats) = read_catalog(&config).await.unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(stats.rejected_language, 2);
    assert!(catalog.is_inflection("went"));
    assert!(!catalog.is_inflection("fue"));
}

#[tokio::test]
async fn missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = BuildConfig::new(dir.path().join("absent.jsonl"));
    let err = read_catalog(&config).await.unwrap_err();
    assert!(matches!(err, BuildError::Input { .. }));
    assert!(err.to_string().contains("absent.jsonl"));
}

#[tokio::test]
async fn null_side_fields_keep_the_record() {
    let dir = TempDir::new().unwrap();
    let path = write_input(
        &dir,
        br#"{"word":"cat","forms":[{"form":null,"tags":["plural"]},{"form":"cats"}]}
{"word":"dog","synonyms":[{"word":null}]}
{"word":"bat","forms":[{"form":"bats","tags":[null]}]}
{"word":"fox","senses":[null,["animal"]]}
"#,
    );

    let (catalog, stats) = read_catalog(&BuildConfig::new(path)).await.unwrap();
    assert_eq!(stats.malformed, 0);
    assert_eq!(stats.accepted, 4);
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.inflection_count(), 2);
    assert!(catalog.is_inflection("cats"));
    assert!(catalog.is_inflection("bats"));
    assert!(!catalog.is_inflection(""));
}
