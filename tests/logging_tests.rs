
use std::fs;
use tempfile::tempdir;
use test_helpers::{add_entry, jotter_command};

fn stderr_of(args: &[&str], data_dir: &std::path::Path) -> (bool, String) {
    let output = jotter_command(data_dir).args(args).output().unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn test_quiet_by_default() {
    let dir = tempdir().unwrap();
    add_entry(dir.path(), "hello");

    let (ok, stderr) = stderr_of(&["list"], dir.path());

    assert!(ok);
    assert!(stderr.is_empty(), "unexpected stderr: {}", stderr);
}

#[test]
fn test_verbose_json_logs_are_one_object_per_line() {
    let dir = tempdir().unwrap();
    add_entry(dir.path(), "secret diary text");

    let (ok, stderr) = stderr_of(&["--verbose", "--log-format", "json", "list"], dir.path());

    assert!(ok);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in lines {
        let event: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("not JSON ({}): {}", e, line));
        assert!(event["timestamp"].is_string());
        assert!(event["level"].is_string());
        assert_eq!(event["span"]["service"], "jotter");
    }
    assert!(!stderr.contains("secret diary text"));
}

#[test]
fn test_failure_is_logged_once() {
    let dir = tempdir().unwrap();

    let (ok, stderr) = stderr_of(&["show", "missing-id"], dir.path());

    assert!(!ok);
    assert_eq!(stderr.matches("Command failed").count(), 1);
    assert_eq!(stderr.matches("Error: Entry not found: missing-id").count(), 1);
}

#[test]
fn test_unreadable_store_warns() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("entries.json"), "[1, 2,").unwrap();

    let (ok, stderr) = stderr_of(&["list"], dir.path());

    assert!(ok);
    assert!(stderr.contains("WARN"), "expected a warning, got: {}", stderr);
}
