//! End-to-end checks against the built binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn timesheet(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_timesheet"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env("NO_COLOR", "1")
        .env("TIMESHEET_TODAY", "2024-03-05")
        .env("TIMESHEET_PICKER", "head -n 1")
        .env_remove("TIMESHEET_ROOT")
        .output()
        .expect("failed to run timesheet binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_project_registry_commands() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let out = timesheet(root, &["add-project", "Alpha"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Project Alpha has been added."));

    let out = timesheet(root, &["add-project", "Alpha"]);
    assert!(stdout(&out).contains("Project Alpha already exists."));

    timesheet(root, &["add-project", "Beta"]);
    let out = timesheet(root, &["list-projects"]);
    assert_eq!(stdout(&out), "Alpha\nBeta\n");

    let out = timesheet(root, &["delete-project", "Alpha"]);
    assert!(stdout(&out).contains("Project Alpha has been deleted."));
    let out = timesheet(root, &["delete-project", "Gamma"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Project Gamma does not exist."));

    let stored = fs::read_to_string(root.join("projects.json")).unwrap();
    let names: Vec<String> = serde_json::from_str(&stored).unwrap();
    assert_eq!(names, vec!["Beta"]);
}

#[test]
fn test_list_projects_without_registry_fails() {
    let temp_dir = TempDir::new().unwrap();
    let out = timesheet(temp_dir.path(), &["list-projects"]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("There is no projects.json file"));
    assert!(!stderr.contains("RegistryNotFound"));
}

#[test]
fn test_show_missing_timesheet_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let out = timesheet(temp_dir.path(), &["show", "2024-03-05"]);

    assert!(out.status.success());
    assert_eq!(stdout(&out), "No timesheet found in the directory 2024-03-05\n");
}

#[test]
fn test_show_renders_record() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("2024-03-05")).unwrap();
    fs::write(
        root.join("2024-03-05/timesheet.json"),
        r#"{"date": "2024-03-05", "projects": [{"name": "Alpha", "notes": "2024-03-05/Alpha-notes.txt", "media": null, "hours": 2.5}], "hours": 3}"#,
    )
    .unwrap();

    let out = timesheet(root, &["show", "2024-03-05"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Total Hours Worked: 3\n"));
    assert!(text.contains("  - Project Name: Alpha\n"));
    assert!(text.contains("    Notes: [File not found]\n"));
}

#[cfg(unix)]
#[test]
fn test_create_for_existing_day_fails_with_message() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    timesheet(root, &["add-project", "Alpha"]);
    fs::create_dir_all(root.join("2024-03-05")).unwrap();

    // `head -n 1` picks "today"
    let out = timesheet(root, &["create"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("A directory with the name 2024-03-05 already exists"));
}
