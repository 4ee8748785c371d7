//! Episode metadata extracted from a filename.

use serde::{Deserialize, Serialize};

/// Which pattern in the cascade produced an [`EpisodeInfo`].
///
/// Recorded for debugging and ordering tie-breaks; `Number` marks the
/// positional fallback used when no pattern matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// `S01E05` style, or a spelled-out `Season 1 ... Episode 5` span.
    Sxe,
    /// `1x05` style.
    XSep,
    /// Episode-only forms: `Episode 5`, `Ep 5`, `E05`, `Part 5`, `Chapter 5`.
    Episode,
    /// Positional fallback, no pattern matched.
    Number,
    /// No information at all.
    None,
}

/// Season/episode metadata for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeInfo {
    /// Season number, when the matching pattern carries one.
    pub season: Option<u32>,
    /// Episode number, always present (positional fallback otherwise).
    pub episode: u32,
    /// The raw substring that matched.
    pub raw_match: String,
    /// Which pattern matched.
    pub pattern: PatternKind,
}

impl EpisodeInfo {
    /// Build the positional fallback for a file at `position` in its batch.
    pub fn from_position(position: usize) -> Self {
        let episode = position as u32 + 1;
        Self {
            season: None,
            episode,
            raw_match: episode.to_string(),
            pattern: PatternKind::Number,
        }
    }
}
