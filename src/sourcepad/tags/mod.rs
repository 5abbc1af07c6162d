//! Tag support for sourcepad.
//!
//! A tag is a `(type, name)` pair used to categorize sources. The type groups
//! related tags (for instance the search terms that led to a source) and
//! defaults to [`DEFAULT_TAG_TYPE`] when the user gives only a name.
//!
//! ## Tag Syntax
//!
//! On the command line a tag is written either as `name` or as `type:name`.
//! See [`validation`] for the character rules applied to both halves.

pub mod validation;

use crate::error::{Result, SourcepadError};
use std::fmt;
use std::str::FromStr;

pub use validation::{validate_tag_part, TagValidationError};

pub const DEFAULT_TAG_TYPE: &str = "Search";

/// A validated tag. Ordering is by type, then name, which keeps tag sets
/// deterministic for hashing and display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    kind: String,
    name: String,
}

impl Tag {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let kind = kind.into();
        let name = name.into();
        validate_tag_part(&kind).map_err(|e| SourcepadError::illegal("tag type", e.to_string()))?;
        validate_tag_part(&name).map_err(|e| SourcepadError::illegal("tag", e.to_string()))?;
        Ok(Self { kind, name })
    }

    /// Creates a tag of the default type.
    pub fn with_default_type(name: impl Into<String>) -> Result<Self> {
        Self::new(DEFAULT_TAG_TYPE, name)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Tag {
    type Err = SourcepadError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((kind, name)) => Tag::new(kind.trim(), name.trim()),
            None => Tag::with_default_type(s.trim()),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}
