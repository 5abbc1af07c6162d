//! # Display Indexes
//!
//! Users refer to sources by their 1-based position in the *displayed view*
//! of a collection, never by anything stored. The displayed view is:
//!
//! 1. the collection's sources that pass its active [`ViewFilter`],
//! 2. sorted pinned-first, then by rank (`order`), stable for ties.
//!
//! Indexes are therefore only meaningful against the view the user last
//! saw: after a `find`, `delete 1` removes the first *match*, not the first
//! source in the library.

use crate::error::{Result, SourcepadError};
use crate::model::Source;
use crate::source_list::SourceList;
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based position in a displayed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub fn new(one_based: usize) -> Option<Self> {
        (one_based > 0).then_some(Self(one_based))
    }

    pub fn one_based(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(DisplayIndex::new)
            .ok_or_else(|| format!("Index must be a positive integer, got '{}'", s))
    }
}

/// Keyword filter narrowing a displayed view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewFilter {
    #[default]
    All,
    Keywords(Vec<String>),
}

impl ViewFilter {
    pub fn accepts(&self, source: &Source) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::Keywords(keywords) => source.matches_any(keywords),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplaySource {
    pub index: DisplayIndex,
    pub source: Source,
}

/// Builds the displayed view of `list` under `filter`.
pub fn index_sources(list: &SourceList, filter: &ViewFilter) -> Vec<DisplaySource> {
    let mut visible: Vec<&Source> = list.iter().filter(|s| filter.accepts(s)).collect();
    visible.sort_by_key(|s| (!s.is_pinned(), s.order()));

    visible
        .into_iter()
        .enumerate()
        .map(|(i, source)| DisplaySource {
            index: DisplayIndex(i + 1),
            source: source.clone(),
        })
        .collect()
}

/// Resolves `index` against the displayed view of `list`.
pub fn resolve_index(
    list: &SourceList,
    filter: &ViewFilter,
    index: DisplayIndex,
) -> Result<Source> {
    index_sources(list, filter)
        .into_iter()
        .nth(index.zero_based())
        .map(|dp| dp.source)
        .ok_or_else(|| {
            SourcepadError::Command(format!("The source index provided is invalid: {}", index))
        })
}
