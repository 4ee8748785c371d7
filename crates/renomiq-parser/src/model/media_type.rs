//! Media type enum.

use serde::{Deserialize, Serialize};

/// Category of a media file, determined from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Video container (mkv, mp4, ...)
    Video,
    /// Subtitle file (srt, ass, ...)
    Subtitle,
    /// Dubbing / external audio track (mka, ac3, ...)
    Dubbing,
    /// Anything else
    #[default]
    Other,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Video => write!(f, "video"),
            MediaType::Subtitle => write!(f, "subtitle"),
            MediaType::Dubbing => write!(f, "dubbing"),
            MediaType::Other => write!(f, "other"),
        }
    }
}
