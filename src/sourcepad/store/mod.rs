//! # Storage Layer
//!
//! This module defines the persistence contract for the two collections. The
//! [`SourceStorage`] trait lets the dispatcher save the library and the bin
//! independently, without knowing where they live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file per collection
//!   - Writes are atomic (temp file + rename)
//!   - File names come from [`crate::config::SourcepadConfig`]
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Counts saves per collection
//!   - Can simulate write failures
//!
//! ## Collection Pattern
//!
//! All operations take a [`Collection`] parameter:
//! - `Collection::Library`: the active sources
//! - `Collection::Bin`: the recycle bin
//!
//! The two are never saved in one transaction. If one save succeeds and the
//! other fails, memory and disk disagree for the failed collection until its
//! next successful save.
//!
//! ## Storage Format
//!
//! See [`json`]. The wire format is versioned separately from the
//! interactive command grammar, but both build entities through the same
//! validating constructors.

use crate::error::Result;
use crate::source_list::SourceList;
use std::fmt;

pub mod fs;
pub mod json;
pub mod memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Library,
    Bin,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Library => write!(f, "library"),
            Collection::Bin => write!(f, "recycle bin"),
        }
    }
}

/// Abstract interface for collection persistence.
pub trait SourceStorage {
    /// Load a collection. Returns `Ok(None)` if it was never saved.
    fn load(&self, collection: Collection) -> Result<Option<SourceList>>;

    /// Persist a collection, replacing whatever was stored before.
    fn save(&mut self, collection: Collection, list: &SourceList) -> Result<()>;
}
