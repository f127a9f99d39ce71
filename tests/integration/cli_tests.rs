//! CLI integration tests
//!
//! These run the compiled binary against throwaway project trees.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("fixdartimports").expect("binary builds")
}

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
}

#[test]
fn test_rewrites_and_reports_modified_files() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "lib/features/home/home_screen.dart",
        "import \"../models/note.dart\";\n",
    );
    write_file(dir.path(), "lib/main.dart", "void main() {}\n");

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("modified:"))
        .stdout(predicate::str::contains("home_screen.dart"))
        .stdout(predicate::str::contains("1/2 files modified"));

    let rewritten = fs::read_to_string(dir.path().join("lib/features/home/home_screen.dart")).unwrap();
    assert_eq!(rewritten, "import '../../core/models/note.dart';\n");
}

#[test]
fn test_dry_run_leaves_files_untouched() {
    let dir = TempDir::new().unwrap();
    let content = "import '../models/note.dart';\n";
    write_file(dir.path(), "lib/home_screen.dart", content);

    cmd()
        .arg(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("1/1 files modified"))
        .stdout(predicate::str::contains("dry run"));

    assert_eq!(
        fs::read_to_string(dir.path().join("lib/home_screen.dart")).unwrap(),
        content
    );
}

#[test]
fn test_missing_lib_directory_reports_zero_files() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No Dart files found"))
        .stdout(predicate::str::contains("0/0 files modified"));
}

#[test]
fn test_exit_code_is_zero_even_when_a_file_errors() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "lib/fine.dart", "import '../models/note.dart';\n");
    // Invalid UTF-8 content fails the read step for any user.
    fs::write(dir.path().join("lib/binary.dart"), [0xff, 0xfe, 0x00]).unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("error"))
        .stdout(predicate::str::contains("binary.dart"))
        .stdout(predicate::str::contains("1/2 files modified"));
}

#[test]
fn test_json_format_emits_machine_readable_report() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "lib/home_screen.dart", "import '../models/note.dart';\n");
    write_file(dir.path(), "lib/main.dart", "void main() {}\n");

    let output = cmd()
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["tool"], "fixdartimports");
    assert_eq!(report["summary"]["scanned"], 2);
    assert_eq!(report["summary"]["modified"], 1);
    assert_eq!(report["files"].as_array().unwrap().len(), 2);
}

#[test]
fn test_json_output_file() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "lib/main.dart", "void main() {}\n");
    let out = dir.path().join("report.json");

    cmd()
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["summary"]["modified"], 0);
}

#[test]
fn test_quiet_mode_prints_only_the_summary() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "lib/home_screen.dart", "import '../models/note.dart';\n");

    cmd()
        .arg(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("modified:").not())
        .stdout(predicate::str::contains("1/1 files modified"));
}

#[test]
fn test_compact_format() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "lib/home_screen.dart", "import '../models/note.dart';\n");

    cmd()
        .arg(dir.path())
        .arg("--format")
        .arg("compact")
        .assert()
        .success()
        .stdout(predicate::str::contains("modified: "))
        .stdout(predicate::str::contains("1/1 files modified"));
}

#[test]
fn test_help_mentions_dry_run() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}
