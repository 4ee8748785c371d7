//! # renomiq-series
//!
//! Series mode: group a batch of files around its video files (subtitles and
//! dubs attached by episode number or fuzzy similarity) and expand naming
//! templates per group.
//!
//! ```
//! use renomiq_common::FileEntry;
//! use renomiq_series::group::{group_files, DEFAULT_MIN_SIMILARITY};
//!
//! let files = vec![
//!     FileEntry::from_path("/show/Show.S01E05.mkv"),
//!     FileEntry::from_path("/show/Show.S01E05.Fa.srt"),
//! ];
//! let groups = group_files(&files, DEFAULT_MIN_SIMILARITY);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].subtitles.len(), 1);
//! ```

pub mod group;
pub mod pattern;

pub use group::{group_files, FileGroup, DEFAULT_MIN_SIMILARITY};
pub use pattern::{
    expand, predefined_patterns, validate_template, FilePreview, GroupPreview, NamingPattern,
    SeriesMetadata,
};
