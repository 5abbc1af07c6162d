use crate::state::ParserMode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourcepadError {
    /// Malformed command text. `usage` is the expected syntax for the command.
    #[error("{message}\n{usage}")]
    Parse { message: String, usage: String },

    #[error("{0}")]
    Command(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    NotFound(String),

    #[error("'{command}' is unavailable in {mode} mode")]
    UnavailableInMode { command: String, mode: ParserMode },

    #[error("Illegal value for {field}: {message}")]
    IllegalValue {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SourcepadError {
    pub fn parse(message: impl Into<String>, usage: impl Into<String>) -> Self {
        SourcepadError::Parse {
            message: message.into(),
            usage: usage.into(),
        }
    }

    pub fn illegal(field: &'static str, message: impl Into<String>) -> Self {
        SourcepadError::IllegalValue {
            field,
            message: message.into(),
        }
    }
}

/// Failure while reading or writing one of the persisted collections.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data in {}: {source}", path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage error: {0}")]
    Backend(String),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn serialization(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StorageError::Serialization {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SourcepadError>;
