//! Basic CLI E2E tests.
//!
//! Each test runs the compiled binary against its own temporary data
//! directory and verifies outputs.

use std::path::Path;
use std::process::Command;

fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_dailyzen"))
        .env("DAILYZEN_DATA_DIR", data_dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn habit_id(data_dir: &Path) -> String {
    let (stdout, _, code) = run_cli(data_dir, &["habit", "list", "--json"]);
    assert_eq!(code, 0, "habit list failed");
    let habits: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    habits[0]["id"].as_str().unwrap().to_string()
}

#[test]
fn test_habit_add_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["habit", "add", "Meditate"]);
    assert_eq!(code, 0, "habit add failed");
    assert!(stdout.contains("Habit created:"));

    let (stdout, _, code) = run_cli(dir.path(), &["habit", "list"]);
    assert_eq!(code, 0, "habit list failed");
    assert!(stdout.contains("Meditate"));
}

#[test]
fn test_habit_done_updates_streak() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["habit", "add", "Meditate"]);
    let id = habit_id(dir.path());

    let (stdout, _, code) = run_cli(dir.path(), &["habit", "done", &id]);
    assert_eq!(code, 0, "habit done failed");
    assert!(stdout.contains("streak 1"));

    let (stdout, _, code) = run_cli(dir.path(), &["stats", "summary", "--json"]);
    assert_eq!(code, 0, "stats summary failed");
    let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stats["currentStreak"], 1);
    assert_eq!(stats["completedDays"], 1);
}

#[test]
fn test_unknown_habit_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["habit", "done", "missing"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no habit with id"));
}

#[test]
fn test_export_import_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["habit", "add", "Meditate"]);
    let (exported, _, code) = run_cli(dir.path(), &["data", "export"]);
    assert_eq!(code, 0, "export failed");

    let other = tempfile::tempdir().unwrap();
    let file = other.path().join("export.json");
    std::fs::write(&file, &exported).unwrap();
    let (stdout, _, code) = run_cli(other.path(), &["data", "import", file.to_str().unwrap()]);
    assert_eq!(code, 0, "import failed");
    assert!(stdout.contains("Imported 1 habits."));

    let (reexported, _, _) = run_cli(other.path(), &["data", "export"]);
    assert_eq!(exported, reexported);
}

#[test]
fn test_config_theme_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "theme"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "system");

    run_cli(dir.path(), &["config", "theme", "dark"]);
    let (stdout, _, _) = run_cli(dir.path(), &["config", "theme"]);
    assert_eq!(stdout.trim(), "dark");
}

#[test]
fn test_quote_prints_attribution() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["quote"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("--"));
}
