#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_dailylog"))
        .args(args)
        .output()
        .expect("failed to run dailylog")
}

fn all_lines(dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let content = fs::read_to_string(entry.unwrap().path()).unwrap();
        lines.extend(content.lines().map(ToString::to_string));
    }
    lines
}

#[test]
fn logs_joined_message_to_dated_file() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("logs");
    let config = tmp.path().join("absent.toml");

    let output = run(&[
        "--config",
        config.to_str().unwrap(),
        "--root",
        root.to_str().unwrap(),
        "warn",
        "disk",
        "almost",
        "full",
    ]);
    assert!(output.status.success(), "{output:?}");

    let lines = all_lines(&root);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" WARN disk almost full"), "{}", lines[0]);
}

#[test]
fn invalid_level_exits_failure() {
    let tmp = TempDir::new().unwrap();
    let output = run(&["--root", tmp.path().to_str().unwrap(), "loud", "hello"]);
    assert!(!output.status.success());
}

#[test]
fn missing_message_exits_failure() {
    let tmp = TempDir::new().unwrap();
    let output = run(&["--root", tmp.path().to_str().unwrap(), "info"]);
    assert!(!output.status.success());
}

#[test]
fn unusable_root_exits_failure() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("file");
    fs::write(&blocker, "x").unwrap();
    let config = tmp.path().join("absent.toml");

    let output = run(&[
        "--config",
        config.to_str().unwrap(),
        "--root",
        blocker.join("logs").to_str().unwrap(),
        "info",
        "hello",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("make dir"), "{stderr}");
}

#[test]
fn version_prints_version_string() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("dailylog "));
}

#[test]
fn level_aliases_are_accepted() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("logs");
    let config = tmp.path().join("absent.toml");

    for level in ["warning", "ERR"] {
        let output = run(&[
            "--config",
            config.to_str().unwrap(),
            "--root",
            root.to_str().unwrap(),
            level,
            "alias",
        ]);
        assert!(output.status.success(), "{level}: {output:?}");
    }

    let lines = all_lines(&root);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" WARN alias"), "{}", lines[0]);
    assert!(lines[1].ends_with(" ERROR alias"), "{}", lines[1]);
}

#[test]
fn invalid_level_names_the_bad_value() {
    let tmp = TempDir::new().unwrap();
    let output = run(&["--root", tmp.path().to_str().unwrap(), "loud", "hello"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown log level: 'loud'"), "{stderr}");
}
