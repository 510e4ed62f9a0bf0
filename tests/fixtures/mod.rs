//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the gradient-card binary
pub fn gradient_card_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gradient-card")
}

/// Props of the reference scenario: every visual prop set and valid.
pub fn scenario_props() -> Value {
    serde_json::json!({
        "children": "Featured",
        "gradientFrom": "#ff0000",
        "gradientTo": "#0000ff",
        "borderWidth": 5,
        "borderRadius": "1rem",
        "padding": "1rem",
        "background": "white",
        "shadow": "small",
        "animated": "scale"
    })
}

/// Props with one invalid color, one clamped width and one invalid radius.
pub fn broken_props() -> Value {
    serde_json::json!({
        "gradientFrom": "invalid-color",
        "borderWidth": 100,
        "borderRadius": "invalid-radius"
    })
}

/// Writes `props` as JSON to a temp file.
///
/// The TempDir must be kept alive for as long as the file is used.
pub fn create_temp_props_file(props: &Value) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("card.json");
    fs::write(&path, serde_json::to_string_pretty(props).unwrap()).expect("Failed to write props");
    (path, temp_dir)
}

/// Writes a config file into `dir` and returns its path.
pub fn create_config_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

/// Runs the binary with an isolated (missing) config file.
pub fn run(temp_dir: &TempDir, args: &[&str]) -> Output {
    let config = temp_dir.path().join("no-config.toml");
    Command::new(gradient_card_bin())
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("Should parse JSON output ({e}): {stdout}"))
}
