//! JSON wire format for a persisted collection.
//!
//! ```json
//! {
//!   "version": 1,
//!   "sources": [
//!     {
//!       "title": "Algorithm Researchers",
//!       "type": "article",
//!       "author": "",
//!       "detail": "A research about researchers on algorithms.",
//!       "biblioFields": [{ "type": "Journal", "body": "Nature" }],
//!       "tags": [{ "type": "Search", "name": "research" }],
//!       "pinned": false,
//!       "order": 1
//!     }
//!   ]
//! }
//! ```
//!
//! Loading rebuilds every entry through [`Source::new`], so a file that was
//! edited by hand is held to the same rules as interactive input. The first
//! invalid field fails the whole load.

use crate::error::{Result, SourcepadError};
use crate::model::{BiblioField, Source, SourceFields};
use crate::source_list::SourceList;
use crate::tags::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    FORMAT_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredSourceList {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub sources: Vec<StoredSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredSource {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub author: Option<String>,
    pub detail: Option<String>,
    #[serde(default)]
    pub biblio_fields: Vec<StoredBiblioField>,
    #[serde(default)]
    pub tags: Vec<StoredTag>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredTag {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredBiblioField {
    #[serde(rename = "type")]
    pub kind: String,
    pub body: String,
}

impl From<&Source> for StoredSource {
    fn from(source: &Source) -> Self {
        Self {
            title: Some(source.title().to_string()),
            kind: Some(source.kind().to_string()),
            author: Some(source.author().to_string()),
            detail: Some(source.detail().to_string()),
            biblio_fields: source
                .biblio_fields()
                .iter()
                .map(|f| StoredBiblioField {
                    kind: f.kind().to_string(),
                    body: f.body().to_string(),
                })
                .collect(),
            tags: source
                .tags()
                .iter()
                .map(|t| StoredTag {
                    kind: t.kind().to_string(),
                    name: t.name().to_string(),
                })
                .collect(),
            pinned: source.is_pinned(),
            order: Some(source.order()),
            deleted_at: source.deleted_at(),
        }
    }
}

impl StoredSource {
    /// Rebuilds the entity. `fallback_order` is used for files written
    /// before ranks were stored.
    pub fn into_source(self, fallback_order: u64) -> Result<Source> {
        let title = required("title", self.title)?;
        let kind = required("type", self.kind)?;
        let author = required("author", self.author)?;
        let detail = required("detail", self.detail)?;
        let tags = self
            .tags
            .into_iter()
            .map(|t| Tag::new(t.kind, t.name))
            .collect::<Result<BTreeSet<Tag>>>()?;
        let biblio_fields = self
            .biblio_fields
            .into_iter()
            .map(|f| BiblioField::new(f.kind.parse()?, f.body))
            .collect::<Result<Vec<_>>>()?;

        let fields = SourceFields {
            title,
            author,
            kind,
            detail,
            tags,
            biblio_fields,
        };

        Ok(Source::new(fields)?
            .with_pinned(self.pinned)
            .with_order(self.order.unwrap_or(fallback_order))
            .with_deleted_at(self.deleted_at))
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| SourcepadError::illegal(field, "field is missing"))
}

impl From<&SourceList> for StoredSourceList {
    fn from(list: &SourceList) -> Self {
        Self {
            version: FORMAT_VERSION,
            sources: list.iter().map(StoredSource::from).collect(),
        }
    }
}

impl StoredSourceList {
    pub fn into_source_list(self) -> Result<SourceList> {
        let sources = self
            .sources
            .into_iter()
            .enumerate()
            .map(|(i, stored)| stored.into_source(i as u64 + 1))
            .collect::<Result<Vec<_>>>()?;
        SourceList::from_sources(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Source {
        Source::new(SourceFields {
            title: "Algorithm Researchers".into(),
            author: "Knuth".into(),
            kind: "article".into(),
            detail: "A research about researchers on algorithms.".into(),
            tags: BTreeSet::from(["research".parse().unwrap()]),
            biblio_fields: vec!["Journal:Nature".parse().unwrap()],
        })
        .unwrap()
        .with_order(3)
        .with_pinned(true)
    }

    #[test]
    fn keeps_non_identity_state() {
        let list = SourceList::from_sources(vec![sample()]).unwrap();
        let json = serde_json::to_string(&StoredSourceList::from(&list)).unwrap();
        let parsed: StoredSourceList = serde_json::from_str(&json).unwrap();
        let loaded = parsed.into_source_list().unwrap();

        let source = &loaded.sources()[0];
        assert_eq!(source, &sample());
        assert!(source.is_pinned());
        assert_eq!(source.order(), 3);
        assert_eq!(source.biblio_fields(), sample().biblio_fields());
    }

    #[test]
    fn uses_wire_field_names() {
        let list = SourceList::from_sources(vec![sample()]).unwrap();
        let value = serde_json::to_value(StoredSourceList::from(&list)).unwrap();
        let entry = &value["sources"][0];
        assert_eq!(entry["type"], "article");
        assert_eq!(entry["biblioFields"][0]["type"], "Journal");
        assert_eq!(entry["tags"][0]["type"], "Search");
        assert_eq!(entry["tags"][0]["name"], "research");
    }

    #[test]
    fn missing_field_is_named() {
        let json = r#"{ "sources": [ { "title": "A", "author": "", "detail": "" } ] }"#;
        let parsed: StoredSourceList = serde_json::from_str(json).unwrap();
        let err = parsed.into_source_list().unwrap_err();
        assert!(matches!(
            err,
            SourcepadError::IllegalValue { field: "type", .. }
        ));
    }

    #[test]
    fn invalid_tag_fails_load() {
        let json = r#"{ "sources": [ { "title": "A", "type": "", "author": "", "detail": "",
            "tags": [ { "type": "Search", "name": "not valid" } ] } ] }"#;
        let parsed: StoredSourceList = serde_json::from_str(json).unwrap();
        let err = parsed.into_source_list().unwrap_err();
        assert!(matches!(err, SourcepadError::IllegalValue { field: "tag", .. }));
    }

    #[test]
    fn duplicate_entries_fail_load() {
        let json = r#"{ "sources": [
            { "title": "A", "type": "", "author": "", "detail": "", "order": 1 },
            { "title": "A", "type": "", "author": "", "detail": "", "order": 2, "pinned": true }
        ] }"#;
        let parsed: StoredSourceList = serde_json::from_str(json).unwrap();
        let err = parsed.into_source_list().unwrap_err();
        assert!(matches!(err, SourcepadError::Duplicate(_)));
    }

    #[test]
    fn missing_order_falls_back_to_position() {
        let json = r#"{ "sources": [
            { "title": "A", "type": "", "author": "", "detail": "" },
            { "title": "B", "type": "", "author": "", "detail": "" }
        ] }"#;
        let parsed: StoredSourceList = serde_json::from_str(json).unwrap();
        let loaded = parsed.into_source_list().unwrap();
        assert_eq!(loaded.sources()[0].order(), 1);
        assert_eq!(loaded.sources()[1].order(), 2);
    }
}
