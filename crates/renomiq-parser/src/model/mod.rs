//! Data model for filename analysis results.

mod episode_info;
mod media_type;

pub use episode_info::{EpisodeInfo, PatternKind};
pub use media_type::MediaType;

use renomiq_common::FileEntry;
use serde::{Deserialize, Serialize};

/// A file descriptor together with its media classification.
///
/// Derived purely from the name/extension; recomputed whenever
/// classification runs, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedFile {
    #[serde(flatten)]
    pub entry: FileEntry,
    pub media_type: MediaType,
    /// Detected language tag, subtitles only (e.g. "Fa", "English").
    pub language: Option<String>,
}

impl ClassifiedFile {
    /// Path of the underlying file entry.
    pub fn path(&self) -> &str {
        &self.entry.path
    }

    /// Name of the underlying file entry.
    pub fn name(&self) -> &str {
        &self.entry.name
    }
}

/// Result of classifying a whole batch, partitioned by media type.
#[derive(Debug, Clone, Default)]
pub struct Classified {
    pub videos: Vec<ClassifiedFile>,
    pub subtitles: Vec<ClassifiedFile>,
    pub dubs: Vec<ClassifiedFile>,
    pub others: Vec<ClassifiedFile>,
}

impl Classified {
    /// Total number of files across all partitions.
    pub fn len(&self) -> usize {
        self.videos.len() + self.subtitles.len() + self.dubs.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
