//! End-to-end tests for discovery + rewriting over a realistic project tree.

use std::fs;
use std::path::{Path, PathBuf};

use fixdartimports::{FileFinder, FileOutcome, ImportRewriter, RunSummary};
use tempfile::TempDir;

/// Lay out a minimal Flutter-shaped project under a temp dir.
fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// Run the full pipeline the way the binary does and return the summary.
fn run_pipeline(root: &Path, dry_run: bool) -> RunSummary {
    let files = FileFinder::new().find_files(root);
    let rewriter = ImportRewriter::new().unwrap().dry_run(dry_run);

    let mut summary = RunSummary::default();
    for file in &files {
        let status = match rewriter.process_file(file) {
            FileOutcome::Unchanged => fixdartimports::FileStatus::Unchanged,
            FileOutcome::Modified => fixdartimports::FileStatus::Modified,
            FileOutcome::Failed(_) => fixdartimports::FileStatus::Failed,
        };
        summary.record(status);
    }
    summary
}

// ============================================================================
// Rewriting scenarios
// ============================================================================

#[test]
fn test_note_model_import_is_corrected() {
    let dir = TempDir::new().unwrap();
    let file = write_file(
        dir.path(),
        "lib/features/home/note_list_item.dart",
        "import \"../models/note.dart\";\n\nclass NoteListItem {}\n",
    );

    let summary = run_pipeline(dir.path(), false);

    assert_eq!(summary.modified, 1);
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "import '../../core/models/note.dart';\n\nclass NoteListItem {}\n"
    );
}

#[test]
fn test_widget_import_is_corrected() {
    let dir = TempDir::new().unwrap();
    let file = write_file(
        dir.path(),
        "lib/features/note/note_screen.dart",
        "import '../widgets/pika_button.dart';\n",
    );

    run_pipeline(dir.path(), false);

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "import '../../core/widgets/pika_button.dart';\n"
    );
}

#[test]
fn test_clean_file_is_byte_identical_and_reported_unchanged() {
    let dir = TempDir::new().unwrap();
    let content = "import 'package:flutter/material.dart';\n\nvoid main() {}\n";
    let file = write_file(dir.path(), "lib/main.dart", content);

    let summary = run_pipeline(dir.path(), false);

    assert_eq!(summary.scanned, 1);
    assert_eq!(summary.modified, 0);
    assert_eq!(fs::read_to_string(&file).unwrap(), content);
}

#[test]
fn test_mixed_tree_counts_only_changed_files() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "lib/features/home/home_screen.dart",
        "import '../models/note.dart';\n",
    );
    write_file(
        dir.path(),
        "lib/features/note/note_detail.dart",
        "export \"../models/page.dart\";\n",
    );
    write_file(dir.path(), "lib/main.dart", "void main() {}\n");

    let summary = run_pipeline(dir.path(), false);

    assert_eq!(summary.scanned, 3);
    assert_eq!(summary.modified, 2);
    assert_eq!(summary.failed, 0);
}

#[test]
fn test_second_run_changes_nothing_for_terminal_keys() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "lib/features/home/home_screen.dart",
        "import '../models/note.dart';\nimport '../../models/page.dart';\n",
    );

    let first = run_pipeline(dir.path(), false);
    let second = run_pipeline(dir.path(), false);

    assert_eq!(first.modified, 1);
    assert_eq!(second.modified, 0, "second run must be a no-op");
}

#[test]
fn test_dry_run_counts_but_leaves_files_alone() {
    let dir = TempDir::new().unwrap();
    let content = "import '../models/note.dart';\n";
    let file = write_file(dir.path(), "lib/features/home/home_screen.dart", content);

    let summary = run_pipeline(dir.path(), true);

    assert_eq!(summary.modified, 1);
    assert_eq!(fs::read_to_string(&file).unwrap(), content);
}

// ============================================================================
// Failure tolerance
// ============================================================================

#[test]
fn test_unreadable_file_is_counted_as_failed_and_run_completes() {
    let dir = TempDir::new().unwrap();
    let fine = write_file(
        dir.path(),
        "lib/a_fine.dart",
        "import '../models/note.dart';\n",
    );
    // A directory with a .dart name: read_to_string fails for any user,
    // unlike permission bits, which root ignores.
    let locked = dir.path().join("lib/locked.dart");
    fs::create_dir_all(&locked).unwrap();

    let rewriter = ImportRewriter::new().unwrap();
    let mut summary = RunSummary::default();
    for file in [&fine, &locked] {
        let status = match rewriter.process_file(file) {
            FileOutcome::Unchanged => fixdartimports::FileStatus::Unchanged,
            FileOutcome::Modified => fixdartimports::FileStatus::Modified,
            FileOutcome::Failed(_) => fixdartimports::FileStatus::Failed,
        };
        summary.record(status);
    }

    assert_eq!(summary.scanned, 2);
    assert_eq!(summary.modified, 1);
    assert_eq!(summary.failed, 1);
}

#[test]
fn test_binary_content_is_counted_as_failed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lib/generated.dart");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, [0xde, 0xad, 0xbe, 0xef]).unwrap();

    let summary = run_pipeline(dir.path(), false);

    assert_eq!(summary.scanned, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.modified, 0);
}
