use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Source;
use crate::state::Model;

pub fn run(model: &mut Model, source: &Source) -> Result<CmdResult> {
    let order = model.library().next_order()?;
    let added = source.clone().with_order(order).with_deleted_at(None);
    model.library_mut().add(added.clone())?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "New source has been added: {}",
            added
        )))
        .with_affected_sources(vec![added]))
}
