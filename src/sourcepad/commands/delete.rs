use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::state::Model;
use crate::store::Collection;
use chrono::Utc;

/// Moves the source at `index` of the library view into the recycle bin.
///
/// If the bin already holds an equal source, the older bin entry is
/// replaced by this one.
pub fn run(model: &mut Model, index: DisplayIndex) -> Result<CmdResult> {
    let target = model.resolve(Collection::Library, index)?;
    let order = model.bin().next_order()?;

    let removed = model.library_mut().remove(&target)?;
    let binned = removed
        .with_pinned(false)
        .with_order(order)
        .with_deleted_at(Some(Utc::now()));

    if model.bin().contains(&binned) {
        model.bin_mut().replace(&binned, binned.clone())?;
    } else {
        model.bin_mut().add(binned.clone())?;
    }

    if model.selected() == Some(&target) {
        model.set_selected(None);
    }

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Source moved to recycle bin ({}): {}",
            index, binned
        )))
        .with_affected_sources(vec![binned]))
}
