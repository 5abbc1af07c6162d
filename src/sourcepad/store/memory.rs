use super::json::{StoredSource, StoredSourceList};
use super::{Collection, SourceStorage};
use crate::error::{Result, StorageError};
use crate::source_list::SourceList;
use std::collections::HashMap;

/// In-memory storage for testing.
///
/// Collections are kept in their wire form so a save/load cycle goes
/// through the same conversion as [`super::fs::FileStore`].
#[derive(Default, Clone)]
pub struct InMemoryStore {
    data: HashMap<Collection, StoredSourceList>,
    saves: HashMap<Collection, usize>,
    failing: Vec<Collection>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a collection without counting it as a save.
    pub fn with_collection(mut self, collection: Collection, list: &SourceList) -> Self {
        self.data.insert(collection, StoredSourceList::from(list));
        self
    }

    /// Replaces `collection` with an entry that has no title, so the next
    /// load of it fails validation.
    pub fn corrupt(&mut self, collection: Collection) {
        let broken = StoredSource {
            title: None,
            kind: Some(String::new()),
            author: Some(String::new()),
            detail: Some(String::new()),
            biblio_fields: Vec::new(),
            tags: Vec::new(),
            pinned: false,
            order: None,
            deleted_at: None,
        };
        self.data.insert(
            collection,
            StoredSourceList {
                version: super::json::FORMAT_VERSION,
                sources: vec![broken],
            },
        );
    }

    /// Makes every following save of `collection` fail.
    pub fn fail_saves_of(&mut self, collection: Collection) {
        self.failing.push(collection);
    }

    /// How many times `collection` has been saved.
    pub fn save_count(&self, collection: Collection) -> usize {
        self.saves.get(&collection).copied().unwrap_or(0)
    }
}

impl SourceStorage for InMemoryStore {
    fn load(&self, collection: Collection) -> Result<Option<SourceList>> {
        self.data
            .get(&collection)
            .cloned()
            .map(StoredSourceList::into_source_list)
            .transpose()
    }

    fn save(&mut self, collection: Collection, list: &SourceList) -> Result<()> {
        if self.failing.contains(&collection) {
            let message = format!("Simulated write error for {}", collection);
            return Err(StorageError::Backend(message).into());
        }
        self.data.insert(collection, StoredSourceList::from(list));
        *self.saves.entry(collection).or_default() += 1;
        Ok(())
    }
}
