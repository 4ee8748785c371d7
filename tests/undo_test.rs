//! Undo round-trip integration tests.
//!
//! Applies a real rename batch on a temp directory, records it in the
//! ledger, and verifies the recorded inverse restores every path.

use std::fs;
use std::path::Path;

use renomiq::fsops;
use renomiq::history::UndoLedger;
use renomiq_rules::{build_preview, pairs_from_preview, RenameRule};

fn populate(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"data").unwrap();
    }
}

#[test]
fn apply_then_undo_restores_every_path() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), &["one.txt", "two.txt", "three.txt"]);

    let files = fsops::list_files(dir.path()).unwrap();
    let rows = build_preview(
        &files,
        &[RenameRule::Prefix {
            value: "renamed_".into(),
        }],
    );
    let pairs = pairs_from_preview(&rows);
    assert_eq!(pairs.len(), 3);

    let result = fsops::apply_renames(&pairs);
    assert!(result.success, "{:?}", result.error);
    assert!(dir.path().join("renamed_one.txt").exists());
    assert!(!dir.path().join("one.txt").exists());

    let ledger = UndoLedger::new(10, None);
    ledger.record(pairs, dir.path().to_string_lossy(), "prefix batch");

    let undo = ledger.undo_with(fsops::undo_renames);
    assert!(undo.success, "{:?}", undo.error);
    assert_eq!(undo.restored_count, 3);

    for name in ["one.txt", "two.txt", "three.txt"] {
        assert!(dir.path().join(name).exists(), "{name} must be restored");
    }
    assert!(!dir.path().join("renamed_one.txt").exists());
    assert!(!ledger.can_undo(), "successful undo consumes the entry");
}

#[test]
fn failed_undo_keeps_the_entry_for_retry() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), &["a.txt"]);

    let files = fsops::list_files(dir.path()).unwrap();
    let rows = build_preview(
        &files,
        &[RenameRule::Suffix {
            value: "_new".into(),
        }],
    );
    let pairs = pairs_from_preview(&rows);
    assert!(fsops::apply_renames(&pairs).success);

    let ledger = UndoLedger::new(10, None);
    ledger.record(pairs, dir.path().to_string_lossy(), "suffix batch");

    // Sabotage the undo by removing the renamed file.
    fs::remove_file(dir.path().join("a_new.txt")).unwrap();

    let undo = ledger.undo_with(fsops::undo_renames);
    assert!(!undo.success);
    assert!(ledger.can_undo(), "entry must stay at the head after failure");

    // Put the file back; the retry succeeds and consumes the entry.
    fs::write(dir.path().join("a_new.txt"), b"data").unwrap();
    let retry = ledger.undo_with(fsops::undo_renames);
    assert!(retry.success);
    assert!(dir.path().join("a.txt").exists());
    assert!(!ledger.can_undo());
}

#[test]
fn ledger_survives_a_restart_between_apply_and_undo() {
    let dir = tempfile::tempdir().unwrap();
    let history_path = dir.path().join("state").join("history.json");
    populate(dir.path(), &["movie.mkv"]);

    let files = fsops::list_files(dir.path()).unwrap();
    let rows = build_preview(
        &files,
        &[RenameRule::Prefix {
            value: "final_".into(),
        }],
    );
    let pairs = pairs_from_preview(&rows);
    assert!(fsops::apply_renames(&pairs).success);

    {
        let ledger = UndoLedger::new(10, Some(history_path.clone()));
        ledger.record(pairs, dir.path().to_string_lossy(), "before restart");
    }

    // A fresh ledger picks the batch up from disk and can undo it.
    let ledger = UndoLedger::new(10, Some(history_path));
    assert!(ledger.can_undo());

    let undo = ledger.undo_with(fsops::undo_renames);
    assert!(undo.success, "{:?}", undo.error);
    assert!(dir.path().join("movie.mkv").exists());
}
