//! # renomiq-common
//!
//! Shared types and errors used across the renomiq workspace: the file
//! descriptor consumed by every planning stage, the rename pair produced by
//! it, and the outcome shapes returned by the filesystem collaborator.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ApplyResult, DeleteResult, FileEntry, RenamePair, UndoResult};
