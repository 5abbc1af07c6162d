use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ViewFilter;
use crate::state::Model;
use crate::store::Collection;

/// Permanently discards everything in the recycle bin. Emptying an empty
/// bin succeeds.
pub fn run(model: &mut Model) -> Result<CmdResult> {
    let count = model.bin().len();
    model.bin_mut().set_all(Vec::new())?;
    model.set_filter(Collection::Bin, ViewFilter::All);

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Recycle bin has been emptied ({} sources permanently deleted).",
        count
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mode;
    use crate::test_utils::{model_with, source};

    #[test]
    fn empties_bin_and_is_idempotent() {
        let mut model = model_with(&["Kept"]);
        model.bin_mut().add(source("A")).unwrap();
        model.bin_mut().add(source("B")).unwrap();
        mode::switch(&mut model).unwrap();

        let first = run(&mut model).unwrap();
        assert!(first.feedback().contains("emptied"));
        assert!(model.bin().is_empty());

        let second = run(&mut model).unwrap();
        assert!(second.feedback().contains("emptied"));
        assert!(model.bin().is_empty());
        assert_eq!(model.library().len(), 1);
    }
}
