//! End-to-end tests for `gradient-card presets` command.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_presets_json_lists_every_table() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&temp_dir, &["presets", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    for key in ["gradient", "border_width", "border_radius", "padding", "shadow", "animation"] {
        assert!(result[key].is_object(), "missing table {key}");
    }
    assert_eq!(result["gradient"]["ocean"]["from"], "#667eea");
    assert_eq!(result["border_width"]["thick"], 4.0);
    assert_eq!(result["border_radius"]["full"], "50%");
    assert_eq!(
        result["shadow"]["large"],
        "0 10px 25px rgba(0,0,0,0.1), 0 4px 6px rgba(0,0,0,0.05)"
    );
    assert_eq!(result["animation"].as_object().unwrap().len(), 6);
}

#[test]
fn test_presets_single_table() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&temp_dir, &["presets", "border-width"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Border widths:"));
    assert!(stdout.contains("extra_thick  8px"));
    assert!(!stdout.contains("Gradients:"));
}

#[test]
fn test_presets_unknown_table() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&temp_dir, &["presets", "colors"]);
    assert_eq!(output.status.code(), Some(2));
}
