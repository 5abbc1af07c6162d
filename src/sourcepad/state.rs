//! In-memory application state: the two collections, the parser mode, the
//! per-collection view filters and the selected source.

use crate::error::Result;
use crate::index::{index_sources, resolve_index, DisplayIndex, DisplaySource, ViewFilter};
use crate::model::Source;
use crate::source_list::{DeletedSources, SourceList, SourceManager};
use crate::store::Collection;
use std::fmt;

/// Selects which command grammar is active and which collection most
/// commands target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParserMode {
    #[default]
    SourceManager,
    RecycleBin,
}

impl ParserMode {
    pub fn toggled(self) -> Self {
        match self {
            ParserMode::SourceManager => ParserMode::RecycleBin,
            ParserMode::RecycleBin => ParserMode::SourceManager,
        }
    }

    /// The collection that listing and indexing operate on in this mode.
    pub fn collection(self) -> Collection {
        match self {
            ParserMode::SourceManager => Collection::Library,
            ParserMode::RecycleBin => Collection::Bin,
        }
    }
}

impl fmt::Display for ParserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserMode::SourceManager => write!(f, "source manager"),
            ParserMode::RecycleBin => write!(f, "recycle bin"),
        }
    }
}

#[derive(Debug, Default)]
pub struct Model {
    library: SourceManager,
    bin: DeletedSources,
    mode: ParserMode,
    selected: Option<Source>,
    library_filter: ViewFilter,
    bin_filter: ViewFilter,
}

impl Model {
    pub fn new(library: SourceManager, bin: DeletedSources) -> Self {
        Self {
            library,
            bin,
            ..Default::default()
        }
    }

    pub fn library(&self) -> &SourceManager {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut SourceManager {
        &mut self.library
    }

    pub fn bin(&self) -> &DeletedSources {
        &self.bin
    }

    pub fn bin_mut(&mut self) -> &mut DeletedSources {
        &mut self.bin
    }

    pub fn list(&self, collection: Collection) -> &SourceList {
        match collection {
            Collection::Library => &self.library,
            Collection::Bin => &self.bin,
        }
    }

    pub fn mode(&self) -> ParserMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ParserMode) {
        self.mode = mode;
    }

    pub fn selected(&self) -> Option<&Source> {
        self.selected.as_ref()
    }

    pub fn set_selected(&mut self, source: Option<Source>) {
        self.selected = source;
    }

    pub fn filter(&self, collection: Collection) -> &ViewFilter {
        match collection {
            Collection::Library => &self.library_filter,
            Collection::Bin => &self.bin_filter,
        }
    }

    pub fn set_filter(&mut self, collection: Collection, filter: ViewFilter) {
        match collection {
            Collection::Library => self.library_filter = filter,
            Collection::Bin => self.bin_filter = filter,
        }
    }

    /// The displayed view of `collection` under its current filter.
    pub fn displayed(&self, collection: Collection) -> Vec<DisplaySource> {
        index_sources(self.list(collection), self.filter(collection))
    }

    pub fn resolve(&self, collection: Collection, index: DisplayIndex) -> Result<Source> {
        resolve_index(self.list(collection), self.filter(collection), index)
    }

    /// Clears both dirty flags.
    pub fn mark_clean(&mut self) {
        self.library.mark_clean();
        self.bin.mark_clean();
    }
}
