use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SourcepadError};
use crate::index::DisplayIndex;
use crate::model::{BiblioField, Source, SourceFields};
use crate::state::Model;
use crate::store::Collection;
use crate::tags::Tag;
use std::collections::BTreeSet;

/// The fields an `edit` overwrites. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SourceChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub kind: Option<String>,
    pub detail: Option<String>,
    pub tags: Option<BTreeSet<Tag>>,
    pub biblio_fields: Option<Vec<BiblioField>>,
}

impl SourceChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.kind.is_none()
            && self.detail.is_none()
            && self.tags.is_none()
            && self.biblio_fields.is_none()
    }

    pub fn apply(&self, current: &SourceFields) -> SourceFields {
        SourceFields {
            title: self.title.clone().unwrap_or_else(|| current.title.clone()),
            author: self.author.clone().unwrap_or_else(|| current.author.clone()),
            kind: self.kind.clone().unwrap_or_else(|| current.kind.clone()),
            detail: self.detail.clone().unwrap_or_else(|| current.detail.clone()),
            tags: self.tags.clone().unwrap_or_else(|| current.tags.clone()),
            biblio_fields: self
                .biblio_fields
                .clone()
                .unwrap_or_else(|| current.biblio_fields.clone()),
        }
    }
}

pub fn run(model: &mut Model, index: DisplayIndex, changes: &SourceChanges) -> Result<CmdResult> {
    if changes.is_empty() {
        return Err(SourcepadError::Command(
            "At least one field to edit must be provided.".to_string(),
        ));
    }

    let target = model.resolve(Collection::Library, index)?;
    let edited = Source::new(changes.apply(target.fields()))?
        .with_pinned(target.is_pinned())
        .with_order(target.order());

    model.library_mut().replace(&target, edited.clone())?;

    if model.selected() == Some(&target) {
        model.set_selected(Some(edited.clone()));
    }

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Edited source ({}): {}",
            index, edited
        )))
        .with_affected_sources(vec![edited]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::select;
    use crate::test_utils::{index, model_with};

    #[test]
    fn only_supplied_fields_change() {
        let mut model = model_with(&["A"]);
        let pinned = model.library().sources()[0].clone().with_pinned(true);
        let target = model.library().sources()[0].clone();
        model.library_mut().replace(&target, pinned).unwrap();

        let changes = SourceChanges {
            author: Some("Knuth".into()),
            tags: Some(BTreeSet::from(["algorithms".parse().unwrap()])),
            ..Default::default()
        };
        run(&mut model, index(1), &changes).unwrap();

        let edited = &model.library().sources()[0];
        assert_eq!(edited.title(), "A");
        assert_eq!(edited.author(), "Knuth");
        assert_eq!(edited.tags().len(), 1);
        assert!(edited.is_pinned());
        assert_eq!(edited.order(), 1);
    }

    #[test]
    fn empty_changes_are_rejected() {
        let mut model = model_with(&["A"]);
        let err = run(&mut model, index(1), &SourceChanges::default()).unwrap_err();
        assert!(matches!(err, SourcepadError::Command(_)));
        assert!(!model.library().is_dirty());
    }

    #[test]
    fn edit_into_duplicate_is_rejected() {
        let mut model = model_with(&["A", "B"]);
        let changes = SourceChanges {
            title: Some("B".into()),
            ..Default::default()
        };
        let err = run(&mut model, index(1), &changes).unwrap_err();

        assert!(matches!(err, SourcepadError::Duplicate(_)));
        assert_eq!(model.library().sources()[0].title(), "A");
        assert!(!model.library().is_dirty());
    }

    #[test]
    fn invalid_value_is_rejected() {
        let mut model = model_with(&["A"]);
        let changes = SourceChanges {
            title: Some("  ".into()),
            ..Default::default()
        };
        let err = run(&mut model, index(1), &changes).unwrap_err();
        assert!(matches!(
            err,
            SourcepadError::IllegalValue { field: "title", .. }
        ));
    }

    #[test]
    fn editing_selected_source_follows_selection() {
        let mut model = model_with(&["A"]);
        select::run(&mut model, index(1)).unwrap();
        let changes = SourceChanges {
            title: Some("A2".into()),
            ..Default::default()
        };
        run(&mut model, index(1), &changes).unwrap();
        assert_eq!(model.selected().map(|s| s.title()), Some("A2"));
    }
}
