use crate::error::{Result, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIBRARY_FILE: &str = "sources.json";
const DEFAULT_BIN_FILE: &str = "bin.json";

/// Configuration for sourcepad, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourcepadConfig {
    /// File name of the active library, relative to the data directory
    #[serde(default = "default_library_file")]
    pub library_file: String,

    /// File name of the recycle bin, relative to the data directory
    #[serde(default = "default_bin_file")]
    pub bin_file: String,
}

fn default_library_file() -> String {
    DEFAULT_LIBRARY_FILE.to_string()
}

fn default_bin_file() -> String {
    DEFAULT_BIN_FILE.to_string()
}

impl Default for SourcepadConfig {
    fn default() -> Self {
        Self {
            library_file: default_library_file(),
            bin_file: default_bin_file(),
        }
    }
}

impl SourcepadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| StorageError::io(&config_path, e))?;
        let config: SourcepadConfig = serde_json::from_str(&content)
            .map_err(|e| StorageError::serialization(&config_path, e))?;
        Ok(config)
    }
}
