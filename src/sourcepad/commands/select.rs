use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::state::Model;
use crate::store::Collection;

/// Points the selection at the source displayed at `index`. Neither
/// collection changes.
pub fn run(model: &mut Model, index: DisplayIndex) -> Result<CmdResult> {
    let target = model.resolve(Collection::Library, index)?;
    model.set_selected(Some(target.clone()));

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Selected source ({}): {}",
            index, target
        )))
        .with_affected_sources(vec![target]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourcepadError;
    use crate::test_utils::{index, model_with};

    #[test]
    fn selects_without_mutating() {
        let mut model = model_with(&["A", "B"]);
        run(&mut model, index(2)).unwrap();

        assert_eq!(model.selected().map(|s| s.title()), Some("B"));
        assert!(!model.library().is_dirty());
        assert!(!model.bin().is_dirty());
    }

    #[test]
    fn out_of_range_keeps_previous_selection() {
        let mut model = model_with(&["A"]);
        run(&mut model, index(1)).unwrap();
        let err = run(&mut model, index(5)).unwrap_err();

        assert!(matches!(err, SourcepadError::Command(_)));
        assert_eq!(model.selected().map(|s| s.title()), Some("A"));
    }
}
