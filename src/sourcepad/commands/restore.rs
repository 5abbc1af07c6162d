use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::state::Model;
use crate::store::Collection;

/// Moves the source at `index` of the bin view back into the library.
///
/// The source always leaves the bin. If an equal source is already in the
/// library, the bin entry is discarded and the result carries a warning.
pub fn run(model: &mut Model, index: DisplayIndex) -> Result<CmdResult> {
    let target = model.resolve(Collection::Bin, index)?;

    if model.library().contains(&target) {
        model.bin_mut().remove(&target)?;
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "This source already exists in the source manager, \
             so the duplicate was removed from the recycle bin: {}",
            target
        ))));
    }

    let order = model.library().next_order()?;
    let restored = model
        .bin_mut()
        .remove(&target)?
        .with_order(order)
        .with_deleted_at(None);
    model.library_mut().add(restored.clone())?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Source restored ({}): {}",
            index, restored
        )))
        .with_affected_sources(vec![restored]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{delete, mode};
    use crate::error::SourcepadError;
    use crate::test_utils::{displayed_titles, index, model_with, source};

    #[test]
    fn restores_deleted_source() {
        let mut model = model_with(&["A", "B"]);
        delete::run(&mut model, index(1)).unwrap();
        mode::switch(&mut model).unwrap();
        model.mark_clean();

        let result = run(&mut model, index(1)).unwrap();
        assert!(result.feedback().contains("Source restored"));
        assert!(!result.has_warnings());

        assert_eq!(model.bin().len(), 0);
        assert_eq!(displayed_titles(&model, Collection::Library), vec!["B", "A"]);
        assert!(model.library().sources()[1].deleted_at().is_none());
        assert!(model.library().is_dirty());
        assert!(model.bin().is_dirty());
    }

    #[test]
    fn duplicate_is_dropped_from_bin() {
        let mut model = model_with(&["A"]);
        model.bin_mut().add(source("A")).unwrap();
        mode::switch(&mut model).unwrap();
        model.mark_clean();

        let result = run(&mut model, index(1)).unwrap();
        assert!(result.has_warnings());
        assert!(result.feedback().contains("duplicate"));

        assert_eq!(model.bin().len(), 0);
        assert_eq!(model.library().len(), 1);
        assert!(model.bin().is_dirty());
        assert!(!model.library().is_dirty());
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut model = model_with(&[]);
        mode::switch(&mut model).unwrap();
        let err = run(&mut model, index(1)).unwrap_err();
        assert!(matches!(err, SourcepadError::Command(_)));
        assert!(!model.bin().is_dirty());
    }
}
