//! End-to-end tests for `figma-token-sync convert` command.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

/// Path to the figma-token-sync binary
fn sync_bin() -> &'static str {
    env!("CARGO_BIN_EXE_figma-token-sync")
}

/// Runs the binary with an isolated config directory.
fn run(args: &[&str], config_dir: &TempDir) -> Output {
    Command::new(sync_bin())
        .args(args)
        .env("FIGMA_TOKEN_SYNC_CONFIG_DIR", config_dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_convert_writes_payload_file() {
    let (tokens_path, temp_dir) = create_temp_file("tokens.json", TOKENS_JSON);
    let collections_path = temp_dir.path().join("collections.json");
    fs::write(&collections_path, COLLECTIONS_JSON).unwrap();
    let output_path = temp_dir.path().join("out/figma.output.json");

    let output = run(
        &[
            "convert",
            "--input",
            tokens_path.to_str().unwrap(),
            "--collections-file",
            collections_path.to_str().unwrap(),
            "--output",
            output_path.to_str().unwrap(),
        ],
        &temp_dir,
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "Convert should exit with code 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Wrote"), "Output should confirm the write");

    let written = fs::read_to_string(&output_path).expect("payload file should exist");
    let payload: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert!(payload["variables"].as_array().unwrap().len() > 5);
    assert_eq!(payload["variableCollections"][0]["name"], "Semantic");
}

#[test]
fn test_convert_stdout_prints_json() {
    let (tokens_path, temp_dir) = create_temp_file("tokens.json", TOKENS_JSON);

    let output = run(
        &[
            "convert",
            "--input",
            tokens_path.to_str().unwrap(),
            "--collections",
            COLLECTIONS_JSON,
            "--stdout",
        ],
        &temp_dir,
    );

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");
    assert!(payload["variableModeValues"].is_array());
    assert_eq!(
        payload["variables"].as_array().unwrap().len(),
        payload["variableModeValues"].as_array().unwrap().len()
    );
}

#[test]
fn test_convert_default_output_path() {
    let (tokens_path, temp_dir) = create_temp_file("tokens.json", TOKENS_JSON);

    let output = Command::new(sync_bin())
        .args([
            "convert",
            "--input",
            tokens_path.to_str().unwrap(),
            "--collections",
            COLLECTIONS_JSON,
        ])
        .current_dir(temp_dir.path())
        .env("FIGMA_TOKEN_SYNC_CONFIG_DIR", temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(temp_dir.path().join("build/figma.output.json").exists());
}

#[test]
fn test_convert_missing_default_collection() {
    let (tokens_path, temp_dir) = create_temp_file("tokens.json", TOKENS_JSON);

    let output = run(
        &[
            "convert",
            "--input",
            tokens_path.to_str().unwrap(),
            "--collections",
            r#"{"color": {"name": "Color", "modeId": "color"}}"#,
            "--stdout",
        ],
        &temp_dir,
    );

    assert_eq!(output.status.code(), Some(1), "Missing default should be a validation error");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("default"), "Error should name the missing collection");
}

#[test]
fn test_convert_invalid_collections_json() {
    let (tokens_path, temp_dir) = create_temp_file("tokens.json", TOKENS_JSON);

    let output = run(
        &[
            "convert",
            "--input",
            tokens_path.to_str().unwrap(),
            "--collections",
            "{not json",
            "--stdout",
        ],
        &temp_dir,
    );

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_convert_invalid_token_json() {
    let (tokens_path, temp_dir) = create_temp_file("tokens.json", "[1, 2, 3]");

    let output = run(
        &[
            "convert",
            "--input",
            tokens_path.to_str().unwrap(),
            "--collections",
            COLLECTIONS_JSON,
            "--stdout",
        ],
        &temp_dir,
    );

    assert_eq!(output.status.code(), Some(1), "Non-object root should be rejected");
}

#[test]
fn test_convert_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let output = run(
        &[
            "convert",
            "--input",
            missing.to_str().unwrap(),
            "--collections",
            COLLECTIONS_JSON,
            "--stdout",
        ],
        &temp_dir,
    );

    assert_eq!(output.status.code(), Some(2), "Unreadable input should be an I/O error");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_convert_requires_collections() {
    let (tokens_path, temp_dir) = create_temp_file("tokens.json", TOKENS_JSON);

    let output = run(
        &["convert", "--input", tokens_path.to_str().unwrap()],
        &temp_dir,
    );

    assert!(!output.status.success(), "Collections argument is required");
}
