//! The filesystem service: the only module that mutates disk state.
//!
//! The planning crates never call into here; they produce rename pairs and
//! this module applies them. Apply refuses the whole batch up front on
//! duplicate targets, missing sources, or targets that escape the source
//! directory, so a partially sane plan never half-executes its obviously
//! broken part.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use renomiq_common::{ApplyResult, DeleteResult, Error, FileEntry, RenamePair, Result, UndoResult};

/// List the files (not directories) of a folder, non-recursively.
pub fn list_files(folder: &Path) -> Result<Vec<FileEntry>> {
    if !folder.is_dir() {
        return Err(Error::not_found(format!(
            "Not a directory: {}",
            folder.display()
        )));
    }

    let mut entries = Vec::new();

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if !meta.is_file() {
            continue;
        }

        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();

        entries.push(FileEntry {
            path: path.to_string_lossy().to_string(),
            name,
            extension,
        });
    }

    // Directory iteration order is platform-defined; make listings stable.
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(entries)
}

/// Validate a batch of rename pairs without touching disk.
fn check_pairs(pairs: &[RenamePair]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for pair in pairs {
        *counts.entry(pair.to.as_str()).or_insert(0) += 1;
    }
    if counts.values().any(|&c| c > 1) {
        return Some("Conflicting target paths detected".to_string());
    }

    for pair in pairs {
        let from = Path::new(&pair.from);
        let to = Path::new(&pair.to);

        if !from.exists() {
            return Some(format!("Source file does not exist: {}", pair.from));
        }

        if pair.to.contains("..") {
            return Some("Invalid path components detected".to_string());
        }

        // A rename must stay inside the source file's directory tree.
        if let (Some(base_dir), Some(target_parent)) = (from.parent(), to.parent()) {
            if !target_parent.starts_with(base_dir) {
                return Some(format!(
                    "Target path escapes the source directory: {}",
                    pair.to
                ));
            }
        }
    }

    None
}

/// Apply a batch of renames.
///
/// The batch is checked as a whole first; nothing moves when any pair is
/// rejected. Individual rename failures abort the run and are reported in
/// the result rather than panicking or being retried.
pub fn apply_renames(pairs: &[RenamePair]) -> ApplyResult {
    if let Some(error) = check_pairs(pairs) {
        return ApplyResult::failed(error);
    }

    for pair in pairs {
        let from = Path::new(&pair.from);
        let to = Path::new(&pair.to);

        if let Some(parent) = to.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    return ApplyResult::failed(format!(
                        "Failed to create target directory {}: {e}",
                        parent.display()
                    ));
                }
            }
        }

        tracing::debug!("rename {} -> {}", pair.from, pair.to);
        if let Err(e) = fs::rename(from, to) {
            return ApplyResult::failed(format!("Failed to rename {}: {e}", pair.from));
        }
    }

    ApplyResult::ok()
}

/// Undo is just applying the reverse pairs; the count reported is the batch
/// size on success.
pub fn undo_renames(pairs: &[RenamePair]) -> UndoResult {
    let result = apply_renames(pairs);
    UndoResult {
        restored_count: if result.success { pairs.len() } else { 0 },
        success: result.success,
        error: result.error,
    }
}

/// Delete a set of files, counting how many were actually removed.
pub fn delete_files<P: AsRef<Path>>(paths: &[P]) -> DeleteResult {
    let mut deleted = 0usize;

    for path in paths {
        let path = path.as_ref();
        match fs::remove_file(path) {
            Ok(()) => deleted += 1,
            Err(e) => {
                return DeleteResult {
                    success: false,
                    deleted_count: deleted,
                    error: Some(format!("Failed to delete {}: {e}", path.display())),
                }
            }
        }
    }

    DeleteResult {
        success: true,
        deleted_count: deleted,
        error: None,
    }
}

/// Build the absolute path of `folder` as a display string.
pub fn folder_display(folder: &Path) -> String {
    folder
        .canonicalize()
        .unwrap_or_else(|_| PathBuf::from(folder))
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"content").unwrap();
    }

    #[test]
    fn list_files_skips_directories_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.txt"));
        touch(&dir.path().join("a.txt"));
        fs::create_dir(dir.path().join("sub")).unwrap();

        let entries = list_files(dir.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(entries[0].extension, "txt");
    }

    #[test]
    fn list_files_rejects_non_directories() {
        assert!(list_files(Path::new("/definitely/not/here")).is_err());
    }

    #[test]
    fn apply_renames_moves_files() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("old.txt");
        let to = dir.path().join("new.txt");
        touch(&from);

        let pairs = vec![RenamePair::new(
            from.to_string_lossy().to_string(),
            to.to_string_lossy().to_string(),
        )];
        let result = apply_renames(&pairs);
        assert!(result.success, "{:?}", result.error);
        assert!(!from.exists());
        assert!(to.exists());
    }

    #[test]
    fn apply_refuses_duplicate_targets() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        touch(&a);
        touch(&b);

        let target = dir.path().join("same.txt").to_string_lossy().to_string();
        let pairs = vec![
            RenamePair::new(a.to_string_lossy().to_string(), target.clone()),
            RenamePair::new(b.to_string_lossy().to_string(), target),
        ];
        let result = apply_renames(&pairs);
        assert!(!result.success);
        // Nothing moved.
        assert!(a.exists());
        assert!(b.exists());
    }

    #[test]
    fn apply_refuses_missing_sources() {
        let dir = tempfile::tempdir().unwrap();
        let pairs = vec![RenamePair::new(
            dir.path().join("ghost.txt").to_string_lossy().to_string(),
            dir.path().join("real.txt").to_string_lossy().to_string(),
        )];
        let result = apply_renames(&pairs);
        assert!(!result.success);
    }

    #[test]
    fn apply_refuses_escaping_targets() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("a.txt");
        touch(&from);

        let pairs = vec![RenamePair::new(
            from.to_string_lossy().to_string(),
            "/elsewhere/a.txt".to_string(),
        )];
        let result = apply_renames(&pairs);
        assert!(!result.success);
        assert!(from.exists());
    }

    #[test]
    fn undo_restores_the_original_names() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("old.txt");
        let to = dir.path().join("new.txt");
        touch(&from);

        let pairs = vec![RenamePair::new(
            from.to_string_lossy().to_string(),
            to.to_string_lossy().to_string(),
        )];
        assert!(apply_renames(&pairs).success);

        let inverse: Vec<RenamePair> = pairs.iter().map(RenamePair::inverse).collect();
        let result = undo_renames(&inverse);
        assert!(result.success);
        assert_eq!(result.restored_count, 1);
        assert!(from.exists());
        assert!(!to.exists());
    }

    #[test]
    fn delete_files_counts_removals() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        touch(&a);
        touch(&b);

        let result = delete_files(&[&a, &b]);
        assert!(result.success);
        assert_eq!(result.deleted_count, 2);
        assert!(!a.exists());
    }

    #[test]
    fn delete_reports_partial_progress_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        touch(&a);
        let ghost = dir.path().join("ghost.txt");

        let result = delete_files(&[&a, &ghost]);
        assert!(!result.success);
        assert_eq!(result.deleted_count, 1);
        assert!(result.error.is_some());
    }
}
