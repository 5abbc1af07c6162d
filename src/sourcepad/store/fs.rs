use super::json::StoredSourceList;
use super::{Collection, SourceStorage};
use crate::config::SourcepadConfig;
use crate::error::{Result, StorageError};
use crate::source_list::SourceList;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
    library_file: String,
    bin_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self::with_config(root, &SourcepadConfig::default())
    }

    pub fn with_config(root: PathBuf, config: &SourcepadConfig) -> Self {
        Self {
            root,
            library_file: config.library_file.clone(),
            bin_file: config.bin_file.clone(),
        }
    }

    pub fn path_for(&self, collection: Collection) -> PathBuf {
        match collection {
            Collection::Library => self.root.join(&self.library_file),
            Collection::Bin => self.root.join(&self.bin_file),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| StorageError::io(&self.root, e))?;
        }
        Ok(())
    }
}

impl SourceStorage for FileStore {
    fn load(&self, collection: Collection) -> Result<Option<SourceList>> {
        let path = self.path_for(collection);
        if !path.exists() {
            debug!(path = %path.display(), "no saved {}", collection);
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| StorageError::io(&path, e))?;
        let stored: StoredSourceList =
            serde_json::from_str(&content).map_err(|e| StorageError::serialization(&path, e))?;
        let list = stored.into_source_list()?;
        debug!(path = %path.display(), count = list.len(), "loaded {}", collection);
        Ok(Some(list))
    }

    fn save(&mut self, collection: Collection, list: &SourceList) -> Result<()> {
        self.ensure_dir()?;
        let path = self.path_for(collection);
        let content = serde_json::to_string_pretty(&StoredSourceList::from(list))
            .map_err(|e| StorageError::serialization(&path, e))?;

        // Atomic write
        let tmp_path = self.root.join(format!(".sources-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(|e| StorageError::io(&tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StorageError::io(&path, e).into());
        }

        debug!(path = %path.display(), count = list.len(), "saved {}", collection);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourcepadError;
    use crate::model::{Source, SourceFields};
    use tempfile::TempDir;

    fn source(title: &str) -> Source {
        Source::new(SourceFields::titled(title)).unwrap()
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load(Collection::Library).unwrap().is_none());
    }

    #[test]
    fn collections_are_saved_to_separate_files() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));

        let library = SourceList::from_sources(vec![source("A"), source("B")]).unwrap();
        let bin = SourceList::from_sources(vec![source("C")]).unwrap();
        store.save(Collection::Library, &library).unwrap();
        store.save(Collection::Bin, &bin).unwrap();

        assert!(dir.path().join("data").join("sources.json").exists());
        assert!(dir.path().join("data").join("bin.json").exists());
        assert_eq!(store.load(Collection::Library).unwrap().unwrap(), library);
        assert_eq!(store.load(Collection::Bin).unwrap().unwrap(), bin);
    }

    #[test]
    fn no_tmp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store
            .save(Collection::Library, &SourceList::from_sources(vec![source("A")]).unwrap())
            .unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn failed_rename_removes_tmp_file() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory where the library file should go.
        let blocker = dir.path().join("sources.json");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "x").unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let err = store
            .save(Collection::Library, &SourceList::from_sources(vec![source("A")]).unwrap())
            .unwrap_err();

        match err {
            SourcepadError::Storage(StorageError::Io { path, .. }) => assert_eq!(path, blocker),
            other => panic!("expected an io error, got {:?}", other),
        }
        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn unwritable_root_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("not-a-dir");
        fs::write(&root, "plain file").unwrap();
        let mut store = FileStore::new(root.clone());

        let err = store
            .save(Collection::Bin, &SourceList::from_sources(vec![source("A")]).unwrap())
            .unwrap_err();

        match err {
            SourcepadError::Storage(StorageError::Io { path, source }) => {
                assert!(path.starts_with(&root));
                assert!(!source.to_string().is_empty());
            }
            other => panic!("expected an io error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bin.json"), "{ not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        let err = store.load(Collection::Bin).unwrap_err();
        assert!(matches!(
            err,
            SourcepadError::Storage(StorageError::Serialization { .. })
        ));
    }

    #[test]
    fn custom_file_names_from_config() {
        let dir = TempDir::new().unwrap();
        let config = SourcepadConfig {
            library_file: "library.json".into(),
            bin_file: "trash.json".into(),
        };
        let store = FileStore::with_config(dir.path().to_path_buf(), &config);
        assert_eq!(
            store.path_for(Collection::Bin),
            dir.path().join("trash.json")
        );
    }
}
