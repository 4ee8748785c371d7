//! # renomiq-parser
//!
//! Filename analysis for batch rename planning.
//!
//! This crate provides the pure, total functions the planner is built on:
//! media-type classification from extensions, season/episode extraction via
//! an ordered pattern cascade, and normalized edit-distance similarity
//! between filenames.
//!
//! ## Quick Start
//!
//! ```
//! use renomiq_parser::episode;
//!
//! let info = episode::extract("Show.S01E05.mkv").unwrap();
//! assert_eq!(info.season, Some(1));
//! assert_eq!(info.episode, 5);
//! ```

pub mod classify;
pub mod episode;
pub mod model;
pub mod similarity;

// Re-export main types for convenience
pub use model::{Classified, ClassifiedFile, EpisodeInfo, MediaType, PatternKind};
