use crate::error::{Result, SourcepadError};
use crate::tags::Tag;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The kinds of bibliographic detail a source may carry besides its core fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BiblioFieldType {
    City,
    Date,
    Journal,
    Pages,
    Publisher,
    Url,
    Webpage,
    Website,
}

impl BiblioFieldType {
    pub const ALL: [BiblioFieldType; 8] = [
        BiblioFieldType::City,
        BiblioFieldType::Date,
        BiblioFieldType::Journal,
        BiblioFieldType::Pages,
        BiblioFieldType::Publisher,
        BiblioFieldType::Url,
        BiblioFieldType::Webpage,
        BiblioFieldType::Website,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BiblioFieldType::City => "City",
            BiblioFieldType::Date => "Date",
            BiblioFieldType::Journal => "Journal",
            BiblioFieldType::Pages => "Pages",
            BiblioFieldType::Publisher => "Publisher",
            BiblioFieldType::Url => "URL",
            BiblioFieldType::Webpage => "Webpage",
            BiblioFieldType::Website => "Website",
        }
    }
}

impl fmt::Display for BiblioFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BiblioFieldType {
    type Err = SourcepadError;

    fn from_str(s: &str) -> Result<Self> {
        BiblioFieldType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = BiblioFieldType::ALL.iter().map(|k| k.as_str()).collect();
                SourcepadError::illegal(
                    "bibliographic field",
                    format!("unknown type '{}' (expected one of {})", s, known.join(", ")),
                )
            })
    }
}

/// A single typed bibliographic entry, e.g. `Journal: Nature`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BiblioField {
    kind: BiblioFieldType,
    body: String,
}

impl BiblioField {
    pub fn new(kind: BiblioFieldType, body: impl Into<String>) -> Result<Self> {
        let body = body.into();
        match body.chars().next() {
            Some(first) if first.is_alphanumeric() => Ok(Self { kind, body }),
            Some(_) => Err(SourcepadError::illegal(
                "bibliographic field",
                format!("{} must start with a letter or digit", kind),
            )),
            None => Err(SourcepadError::illegal(
                "bibliographic field",
                format!("{} cannot be blank", kind),
            )),
        }
    }

    pub fn kind(&self) -> BiblioFieldType {
        self.kind
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl FromStr for BiblioField {
    type Err = SourcepadError;

    /// Parses `TYPE:BODY`.
    fn from_str(s: &str) -> Result<Self> {
        let (kind, body) = s.split_once(':').ok_or_else(|| {
            SourcepadError::illegal(
                "bibliographic field",
                format!("'{}' is not of the form TYPE:BODY", s),
            )
        })?;
        BiblioField::new(kind.parse()?, body.trim())
    }
}

impl fmt::Display for BiblioField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.body)
    }
}

/// The bibliographic content of a source, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SourceFields {
    pub title: String,
    pub author: String,
    pub kind: String,
    pub detail: String,
    pub tags: BTreeSet<Tag>,
    pub biblio_fields: Vec<BiblioField>,
}

impl SourceFields {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// A bibliographic record.
///
/// Two sources are equal when their title, type, author, detail and tags
/// match; pin state, rank, bibliographic fields and deletion time are not
/// part of a source's identity.
#[derive(Debug, Clone)]
pub struct Source {
    fields: SourceFields,
    pinned: bool,
    order: u64,
    deleted_at: Option<DateTime<Utc>>,
}

impl Source {
    pub fn new(fields: SourceFields) -> Result<Self> {
        validate_title(&fields.title)?;
        validate_free_text("author", &fields.author)?;
        validate_free_text("type", &fields.kind)?;
        validate_free_text("detail", &fields.detail)?;
        Ok(Self {
            fields,
            pinned: false,
            order: 0,
            deleted_at: None,
        })
    }

    pub fn title(&self) -> &str {
        &self.fields.title
    }

    pub fn author(&self) -> &str {
        &self.fields.author
    }

    pub fn kind(&self) -> &str {
        &self.fields.kind
    }

    pub fn detail(&self) -> &str {
        &self.fields.detail
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.fields.tags
    }

    pub fn biblio_fields(&self) -> &[BiblioField] {
        &self.fields.biblio_fields
    }

    pub fn fields(&self) -> &SourceFields {
        &self.fields
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn order(&self) -> u64 {
        self.order
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    pub fn with_order(mut self, order: u64) -> Self {
        self.order = order;
        self
    }

    pub fn with_deleted_at(mut self, deleted_at: Option<DateTime<Utc>>) -> Self {
        self.deleted_at = deleted_at;
        self
    }

    /// True if any keyword appears (case-insensitively) in the title, author,
    /// type, detail or one of the tag names.
    pub fn matches_any(&self, keywords: &[String]) -> bool {
        let haystacks = [
            self.fields.title.to_lowercase(),
            self.fields.author.to_lowercase(),
            self.fields.kind.to_lowercase(),
            self.fields.detail.to_lowercase(),
        ];
        keywords.iter().any(|keyword| {
            let keyword = keyword.to_lowercase();
            haystacks.iter().any(|h| h.contains(&keyword))
                || self
                    .fields
                    .tags
                    .iter()
                    .any(|tag| tag.name().to_lowercase().contains(&keyword))
        })
    }
}

impl PartialEq for Source {
    fn eq(&self, other: &Self) -> bool {
        self.fields.title == other.fields.title
            && self.fields.kind == other.fields.kind
            && self.fields.author == other.fields.author
            && self.fields.detail == other.fields.detail
            && self.fields.tags == other.fields.tags
    }
}

impl Eq for Source {}

impl Hash for Source {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.title.hash(state);
        self.fields.kind.hash(state);
        self.fields.author.hash(state);
        self.fields.detail.hash(state);
        self.fields.tags.hash(state);
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.title)?;
        if !self.fields.author.is_empty() {
            write!(f, " by {}", self.fields.author)?;
        }
        if !self.fields.kind.is_empty() {
            write!(f, " [{}]", self.fields.kind)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(SourcepadError::illegal("title", "cannot be blank"));
    }
    if title.starts_with(char::is_whitespace) {
        return Err(SourcepadError::illegal(
            "title",
            "cannot start with whitespace",
        ));
    }
    Ok(())
}

fn validate_free_text(field: &'static str, value: &str) -> Result<()> {
    if value.starts_with(char::is_whitespace) {
        return Err(SourcepadError::illegal(
            field,
            "cannot start with whitespace",
        ));
    }
    Ok(())
}
