//! # Source Collections
//!
//! [`SourceList`] is the ordered, duplicate-free container behind both the
//! active library and the recycle bin. Uniqueness is by the structural
//! equality of [`Source`], never by position.
//!
//! ## Change Tracking
//!
//! Every successful mutation raises the list's dirty flag. Nothing else
//! raises it, and failed mutations leave the list untouched. The dispatcher
//! clears the flags before running a command and reads them afterwards to
//! decide which collections to persist, so the save decision never depends
//! on which command ran.

use crate::error::{Result, SourcepadError};
use crate::model::Source;
use std::collections::HashSet;

/// The active library.
pub type SourceManager = SourceList;
/// The recycle bin.
pub type DeletedSources = SourceList;

#[derive(Debug, Clone, Default)]
pub struct SourceList {
    sources: Vec<Source>,
    dirty: bool,
}

impl SourceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a clean list from previously persisted sources.
    pub fn from_sources(sources: Vec<Source>) -> Result<Self> {
        ensure_unique(&sources)?;
        Ok(Self {
            sources,
            dirty: false,
        })
    }

    pub fn contains(&self, source: &Source) -> bool {
        self.sources.iter().any(|s| s == source)
    }

    pub fn add(&mut self, source: Source) -> Result<()> {
        if self.contains(&source) {
            return Err(SourcepadError::Duplicate(format!(
                "This source already exists: {}",
                source.title()
            )));
        }
        self.sources.push(source);
        self.dirty = true;
        Ok(())
    }

    pub fn remove(&mut self, source: &Source) -> Result<Source> {
        let position = self.position(source)?;
        let removed = self.sources.remove(position);
        self.dirty = true;
        Ok(removed)
    }

    /// Swaps `target` for `edited` in place, keeping its position.
    pub fn replace(&mut self, target: &Source, edited: Source) -> Result<()> {
        let position = self.position(target)?;
        if &edited != target && self.contains(&edited) {
            return Err(SourcepadError::Duplicate(format!(
                "This source already exists: {}",
                edited.title()
            )));
        }
        self.sources[position] = edited;
        self.dirty = true;
        Ok(())
    }

    /// Replaces the whole contents. The incoming list is checked for
    /// duplicates before anything is swapped.
    pub fn set_all(&mut self, sources: Vec<Source>) -> Result<()> {
        ensure_unique(&sources)?;
        self.sources = sources;
        self.dirty = true;
        Ok(())
    }

    /// The rank a newly inserted source should take.
    pub fn next_order(&self) -> Result<u64> {
        match self.sources.iter().map(Source::order).max() {
            None => Ok(1),
            Some(highest) => highest.checked_add(1).ok_or_else(|| {
                SourcepadError::illegal("order", format!("no rank is left after {}", highest))
            }),
        }
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn position(&self, source: &Source) -> Result<usize> {
        self.sources
            .iter()
            .position(|s| s == source)
            .ok_or_else(|| {
                SourcepadError::NotFound(format!("Source not found: {}", source.title()))
            })
    }
}

impl PartialEq for SourceList {
    fn eq(&self, other: &Self) -> bool {
        self.sources == other.sources
    }
}

fn ensure_unique(sources: &[Source]) -> Result<()> {
    let mut seen = HashSet::with_capacity(sources.len());
    for source in sources {
        if !seen.insert(source) {
            return Err(SourcepadError::Duplicate(format!(
                "Sources list contains duplicate source(s): {}",
                source.title()
            )));
        }
    }
    Ok(())
}
