//! The undo ledger: applied rename batches recorded as reversible pairs.
//!
//! The ledger is an explicit object owned by the host and passed by
//! reference into whatever needs it; there is no process-wide singleton.
//! History is bounded and most-recent-first; the oldest entry is evicted
//! silently on overflow. Inverse pairs are always derived mechanically from
//! the forward pairs, never re-read from disk.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use renomiq_common::{RenamePair, Result, UndoResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default number of batches kept.
pub const DEFAULT_CAPACITY: usize = 10;

/// One applied batch, stored with both directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameHistoryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Inverse pairs (to/from swapped); applying these undoes the batch.
    pub pairs: Vec<RenamePair>,
    /// The forward pairs as they were applied.
    pub original_pairs: Vec<RenamePair>,
    pub folder: String,
    pub description: String,
}

impl RenameHistoryEntry {
    /// Build an entry from forward pairs, deriving the inverse mechanically.
    pub fn from_forward_pairs(
        original_pairs: Vec<RenamePair>,
        folder: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let pairs = original_pairs.iter().map(RenamePair::inverse).collect();
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            pairs,
            original_pairs,
            folder: folder.into(),
            description: description.into(),
        }
    }
}

/// Bounded, persisted undo history.
pub struct UndoLedger {
    entries: RwLock<VecDeque<RenameHistoryEntry>>,
    capacity: usize,
    persistence_path: Option<PathBuf>,
}

impl UndoLedger {
    /// Create a ledger, loading any persisted entries from
    /// `persistence_path`. A missing or unreadable history file starts the
    /// ledger empty; the problem is logged, not raised.
    pub fn new(capacity: usize, persistence_path: Option<PathBuf>) -> Self {
        let ledger = Self {
            entries: RwLock::new(VecDeque::new()),
            capacity: capacity.max(1),
            persistence_path,
        };

        if let Some(path) = ledger.persistence_path.clone() {
            if let Err(e) = ledger.load_from_file(&path) {
                tracing::warn!("Failed to load undo history: {}", e);
            }
        }

        ledger
    }

    /// Record an applied batch; returns the stored entry.
    pub fn record(
        &self,
        original_pairs: Vec<RenamePair>,
        folder: impl Into<String>,
        description: impl Into<String>,
    ) -> RenameHistoryEntry {
        let entry = RenameHistoryEntry::from_forward_pairs(original_pairs, folder, description);

        {
            let mut entries = self.entries.write();
            entries.push_front(entry.clone());
            while entries.len() > self.capacity {
                entries.pop_back();
            }
        }

        self.persist();
        entry
    }

    /// Most recent entry, if any.
    pub fn latest(&self) -> Option<RenameHistoryEntry> {
        self.entries.read().front().cloned()
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> Vec<RenameHistoryEntry> {
        self.entries.read().iter().cloned().collect()
    }

    /// Whether an undo is currently possible.
    pub fn can_undo(&self) -> bool {
        !self.entries.read().is_empty()
    }

    /// Remove one entry by id.
    pub fn remove(&self, id: Uuid) -> bool {
        let removed = {
            let mut entries = self.entries.write();
            let before = entries.len();
            entries.retain(|entry| entry.id != id);
            entries.len() < before
        };

        if removed {
            self.persist();
        }
        removed
    }

    /// Drop the whole history.
    pub fn clear(&self) {
        self.entries.write().clear();
        self.persist();
    }

    /// Undo the most recent batch through the given collaborator.
    ///
    /// The entry is removed only after the collaborator reports success; on
    /// failure it stays at the head so the caller can retry.
    pub fn undo_with<F>(&self, apply: F) -> UndoResult
    where
        F: FnOnce(&[RenamePair]) -> UndoResult,
    {
        let Some(entry) = self.latest() else {
            return UndoResult {
                success: false,
                restored_count: 0,
                error: Some("No operation to undo".to_string()),
            };
        };

        let result = apply(&entry.pairs);
        if result.success {
            self.remove(entry.id);
        }
        result
    }

    fn persist(&self) {
        if let Some(ref path) = self.persistence_path {
            if let Err(e) = self.save_to_file(path) {
                tracing::error!("Failed to persist undo history: {}", e);
            }
        }
    }

    fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let entries = self.entries();
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| renomiq_common::Error::persistence(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn load_from_file(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(path)?;
        let loaded: Vec<RenameHistoryEntry> = serde_json::from_str(&content)
            .map_err(|e| renomiq_common::Error::persistence(e.to_string()))?;

        let mut entries = self.entries.write();
        *entries = VecDeque::from(loaded);
        while entries.len() > self.capacity {
            entries.pop_back();
        }

        Ok(())
    }
}
