use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::Model;

/// Flips between the source manager and the recycle bin, and lists the
/// collection that is now active.
pub fn switch(model: &mut Model) -> Result<CmdResult> {
    let mode = model.mode().toggled();
    model.set_mode(mode);

    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!("Switched to {} mode.", mode)))
        .with_listed_sources(model.displayed(mode.collection())))
}
