//! Integration tests for configuration loading

use matchprep::config::{load_config, InvalidPolicy, MAX_RECORDS_PER_BATCH};
use matchprep::formatter::Encoding;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("matchprep.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}

#[test]
fn test_full_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[application]
name = "matchprep"
log_level = "debug"
dry_run = true

[input]
format = "jsonl"

[processing]
encoding = "base64"
on_invalid = "abort"
batch_size = 250

[output]
path = "out/batches.json"
pretty = true

[logging]
local_enabled = false
"#,
    );

    let config = load_config(&path).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);
    assert_eq!(config.input.format, "jsonl");
    assert_eq!(config.encoding().unwrap(), Encoding::Base64);
    assert_eq!(config.invalid_policy().unwrap(), InvalidPolicy::Abort);
    assert_eq!(config.processing.batch_size, 250);
    assert_eq!(config.output.path, "out/batches.json");
    assert!(config.output.pretty);
}

#[test]
fn test_empty_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    let config = load_config(&path).unwrap();
    assert_eq!(config.encoding().unwrap(), Encoding::Hex);
    assert_eq!(config.invalid_policy().unwrap(), InvalidPolicy::Skip);
    assert_eq!(config.processing.batch_size, MAX_RECORDS_PER_BATCH);
    assert_eq!(config.output.path, "prepared.json");
}

#[test]
fn test_env_substitution() {
    let dir = TempDir::new().unwrap();
    std::env::set_var("MATCHPREP_IT_OUTPUT_DIR", "/tmp/prepared");
    let path = write_config(
        &dir,
        "[output]\npath = \"${MATCHPREP_IT_OUTPUT_DIR}/batches.json\"\n",
    );

    let config = load_config(&path).unwrap();
    assert_eq!(config.output.path, "/tmp/prepared/batches.json");
    std::env::remove_var("MATCHPREP_IT_OUTPUT_DIR");
}

#[test]
fn test_invalid_encoding_rejected_at_load() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[processing]\nencoding = \"sha1\"\n");
    assert!(load_config(&path).is_err());
}

#[test]
fn test_oversized_batch_rejected_at_load() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[processing]\nbatch_size = 20000\n");
    assert!(load_config(&path).is_err());
}

#[test]
fn test_missing_file_rejected() {
    assert!(load_config("definitely-not-here.toml").is_err());
}
