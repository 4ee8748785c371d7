//! Core wire types shared between the planning crates and the host.

use serde::{Deserialize, Serialize};

/// A file descriptor as delivered by the filesystem collaborator.
///
/// `path` uniquely identifies a file within a batch. The planning code never
/// touches disk; it only ever sees these descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Absolute path of the file.
    pub path: String,
    /// File name including extension.
    pub name: String,
    /// Extension without the leading dot, may be empty.
    pub extension: String,
}

impl FileEntry {
    /// Build an entry from a path string, deriving name and extension from
    /// the final path segment.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        let extension = match name.rfind('.') {
            Some(idx) if idx > 0 => name[idx + 1..].to_string(),
            _ => String::new(),
        };
        Self {
            path,
            name,
            extension,
        }
    }
}

/// A single planned rename: absolute source and target path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePair {
    pub from: String,
    pub to: String,
}

impl RenamePair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The structural inverse of this pair; applying it after the original
    /// restores the pre-rename state.
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

/// Outcome of applying a batch of renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyResult {
    pub success: bool,
    pub error: Option<String>,
}

impl ApplyResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed<S: Into<String>>(msg: S) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
        }
    }
}

/// Outcome of undoing a previously applied batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UndoResult {
    pub success: bool,
    pub restored_count: usize,
    pub error: Option<String>,
}

/// Outcome of deleting a set of files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResult {
    pub success: bool,
    pub deleted_count: usize,
    pub error: Option<String>,
}
