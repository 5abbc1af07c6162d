use crate::index::DisplayIndex;
use crate::model::{Source, SourceFields};
use crate::source_list::SourceList;
use crate::state::Model;

pub fn source(title: &str) -> Source {
    Source::new(SourceFields::titled(title)).expect("valid test source")
}

pub fn index(one_based: usize) -> DisplayIndex {
    DisplayIndex::new(one_based).expect("positive index")
}

/// A model whose library holds `titles` ranked in the given order, with
/// both dirty flags cleared.
pub fn model_with(titles: &[&str]) -> Model {
    let sources = titles
        .iter()
        .enumerate()
        .map(|(i, title)| source(title).with_order(i as u64 + 1))
        .collect();
    Model::new(
        SourceList::from_sources(sources).expect("unique titles"),
        SourceList::new(),
    )
}

/// Titles of the library's displayed view, in display order.
pub fn displayed_titles(model: &Model, collection: crate::store::Collection) -> Vec<String> {
    model
        .displayed(collection)
        .into_iter()
        .map(|dp| dp.source.title().to_string())
        .collect()
}
