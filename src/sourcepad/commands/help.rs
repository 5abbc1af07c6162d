use crate::commands::{CmdMessage, CmdResult, CommandWord};
use crate::error::Result;
use crate::state::ParserMode;

pub fn help(mode: ParserMode) -> Result<CmdResult> {
    let usages: Vec<&str> = CommandWord::ALL
        .iter()
        .filter(|word| word.available_in(mode))
        .map(|word| word.usage())
        .collect();

    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "Commands available in {} mode:\n\n{}",
        mode,
        usages.join("\n\n")
    ))))
}

pub fn exit() -> Result<CmdResult> {
    let mut result =
        CmdResult::default().with_message(CmdMessage::info("Exiting sourcepad as requested ..."));
    result.exit = true;
    Ok(result)
}
