//! End-to-end tests for `gradient-card config` commands.

use std::process::Command;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_config_show_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&temp_dir, &["config", "show", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["resolver"]["strategy"], "computed");
    assert_eq!(result["contrast"]["text_color"], "#000000");
    assert_eq!(result["cache"]["capacity"], 64);
    assert_eq!(result["logging"]["filter"], "warn");
}

#[test]
fn test_config_show_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_config_file(
        temp_dir.path(),
        "[resolver]\nstrategy = \"pattern\"\n\n[cache]\ncapacity = 0\n",
    );

    let output = Command::new(gradient_card_bin())
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Strategy:    pattern"));
    assert!(stdout.contains("Capacity:    disabled"));
}

#[test]
fn test_config_path_uses_override() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");

    let output = Command::new(gradient_card_bin())
        .arg("--config")
        .arg(&config)
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        config.display().to_string()
    );
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_config_file(temp_dir.path(), "[contrast]\ntext_color = \"nope\"\n");

    let output = Command::new(gradient_card_bin())
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}

#[test]
fn test_config_show_reports_resolver_override() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&temp_dir, &["--resolver", "pattern", "config", "show", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["resolver"]["strategy"], "pattern");
}
