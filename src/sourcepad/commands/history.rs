use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::history::CommandHistory;

pub fn run(history: &CommandHistory) -> Result<CmdResult> {
    if history.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info("You have not yet entered any commands.")));
    }

    let lines: Vec<&str> = history
        .entries()
        .iter()
        .rev()
        .map(|entry| entry.input.as_str())
        .collect();

    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "Entered commands (from most recent to earliest):\n{}",
        lines.join("\n")
    ))))
}
