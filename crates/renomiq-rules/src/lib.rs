//! # renomiq-rules
//!
//! The flat-mode rename pipeline: an ordered set of rename rules applied to
//! every file of a batch, producing one conflict-checked preview row per
//! input file.
//!
//! ```
//! use renomiq_common::FileEntry;
//! use renomiq_rules::{build_preview, RenameRule};
//!
//! let files = vec![FileEntry::from_path("/batch/a.txt")];
//! let rules = vec![RenameRule::Prefix { value: "PRE_".into() }];
//! let rows = build_preview(&files, &rules);
//! assert_eq!(rows[0].new_name.as_deref(), Some("PRE_a.txt"));
//! ```

mod preview;
mod rule;

pub use preview::{build_preview, pairs_from_preview, PreviewRow};
pub use rule::{RenameOptions, RenameRule, SeriesOptions, WordStyle};
