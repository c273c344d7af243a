//! End-to-end runs of the binary against a fake attribute tree

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn samsung_cli(root: &Path, words: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_samsung-cli"))
        .arg("--root")
        .arg(root)
        .args(words)
        .output()
        .unwrap()
}

#[test]
fn test_rejected_value_prints_single_error_line() {
    let dir = tempfile::tempdir().unwrap();
    let output = samsung_cli(dir.path(), &["power", "set", "200"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "Error: Value must be between 0 and 100\n"
    );
}

#[test]
fn test_missing_attribute_prints_single_error_line() {
    let dir = tempfile::tempdir().unwrap();
    let output = samsung_cli(dir.path(), &["fan", "read"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "{}", stderr);
    assert!(stderr.starts_with("Error: Could not open "));
}

#[test]
fn test_set_then_read_through_binary() {
    let dir = tempfile::tempdir().unwrap();
    let threshold = dir
        .path()
        .join("sys/class/power_supply/BAT1/charge_control_end_threshold");
    fs::create_dir_all(threshold.parent().unwrap()).unwrap();
    fs::write(&threshold, "100\n").unwrap();

    let output = samsung_cli(dir.path(), &["power", "set", "80"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let output = samsung_cli(dir.path(), &["power", "read"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Current charge threshold: 80%\n"
    );
}

#[test]
fn test_no_arguments_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = samsung_cli(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .starts_with("Usage: samsung-cli"));
}
