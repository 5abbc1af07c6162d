use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SourcepadError};
use crate::index::DisplayIndex;
use crate::state::Model;
use crate::store::Collection;

pub fn pin(model: &mut Model, index: DisplayIndex) -> Result<CmdResult> {
    pin_state(model, index, true)
}

pub fn unpin(model: &mut Model, index: DisplayIndex) -> Result<CmdResult> {
    pin_state(model, index, false)
}

fn pin_state(model: &mut Model, index: DisplayIndex, is_pinned: bool) -> Result<CmdResult> {
    let target = model.resolve(Collection::Library, index)?;
    if target.is_pinned() == is_pinned {
        let state = if is_pinned { "already pinned" } else { "not pinned" };
        return Err(SourcepadError::Command(format!(
            "Source ({}) is {}: {}",
            index,
            state,
            target.title()
        )));
    }

    let updated = target.clone().with_pinned(is_pinned);
    model.library_mut().replace(&target, updated.clone())?;

    let verb = if is_pinned { "pinned" } else { "unpinned" };
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Source {} ({}): {}",
            verb, index, updated
        )))
        .with_affected_sources(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{displayed_titles, index, model_with};

    #[test]
    fn pinning_moves_source_to_top() {
        let mut model = model_with(&["A", "B"]);
        pin(&mut model, index(2)).unwrap();

        assert_eq!(displayed_titles(&model, Collection::Library), vec!["B", "A"]);
        assert!(model.library().is_dirty());
    }

    #[test]
    fn unpinning_restores_rank_order() {
        let mut model = model_with(&["A", "B"]);
        pin(&mut model, index(2)).unwrap();
        unpin(&mut model, index(1)).unwrap();

        assert_eq!(displayed_titles(&model, Collection::Library), vec!["A", "B"]);
        assert!(model.library().sources().iter().all(|s| !s.is_pinned()));
    }

    #[test]
    fn pinning_twice_is_an_error() {
        let mut model = model_with(&["A"]);
        pin(&mut model, index(1)).unwrap();
        model.mark_clean();

        let err = pin(&mut model, index(1)).unwrap_err();
        assert!(err.to_string().contains("already pinned"));
        assert!(!model.library().is_dirty());
    }

    #[test]
    fn unpinning_unpinned_is_an_error() {
        let mut model = model_with(&["A"]);
        let err = unpin(&mut model, index(1)).unwrap_err();
        assert!(err.to_string().contains("not pinned"));
        assert!(!model.library().is_dirty());
    }
}
