use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ViewFilter;
use crate::state::Model;

/// Clears the filter of the current mode's collection and lists it.
pub fn run(model: &mut Model) -> Result<CmdResult> {
    let collection = model.mode().collection();
    model.set_filter(collection, ViewFilter::All);
    let listed = model.displayed(collection);

    let message = if listed.is_empty() {
        CmdMessage::info(format!("The {} is empty.", collection))
    } else {
        CmdMessage::success(format!("Listed all {} sources in the {}.", listed.len(), collection))
    };

    Ok(CmdResult::default()
        .with_message(message)
        .with_listed_sources(listed))
}

/// Narrows the current mode's collection to sources matching any keyword.
pub fn find(model: &mut Model, keywords: &[String]) -> Result<CmdResult> {
    let collection = model.mode().collection();
    model.set_filter(collection, ViewFilter::Keywords(keywords.to_vec()));
    let listed = model.displayed(collection);

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "{} sources listed!",
            listed.len()
        )))
        .with_listed_sources(listed))
}
