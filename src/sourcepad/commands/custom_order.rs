use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SourcepadError};
use crate::index::DisplayIndex;
use crate::model::Source;
use crate::state::Model;
use crate::store::Collection;

/// Moves the source displayed at `from` to the rank of the source displayed
/// at `to`. Every source ranked between the two shifts one step towards the
/// vacated rank.
///
/// Pinned sources are always displayed above unpinned ones, so both
/// positions must be on the same side of that boundary.
pub fn run(model: &mut Model, from: DisplayIndex, to: DisplayIndex) -> Result<CmdResult> {
    let target = model.resolve(Collection::Library, from)?;
    let destination = model.resolve(Collection::Library, to)?;

    if from == to {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Source is already at position {}: {}",
            to, target
        ))));
    }

    if target.is_pinned() != destination.is_pinned() {
        let (moving, other) = if target.is_pinned() {
            ("pinned", "unpinned")
        } else {
            ("unpinned", "pinned")
        };
        return Err(SourcepadError::Command(format!(
            "A {} source cannot be moved among the {} sources; pin or unpin it first: {}",
            moving,
            other,
            target.title()
        )));
    }

    let old_rank = target.order();
    let new_rank = destination.order();
    let reranked: Vec<Source> = model
        .library()
        .iter()
        .map(|source| {
            let rank = source.order();
            let new_order = if source == &target {
                new_rank
            } else if old_rank < new_rank && rank > old_rank && rank <= new_rank {
                rank - 1
            } else if old_rank > new_rank && rank >= new_rank && rank < old_rank {
                rank + 1
            } else {
                rank
            };
            source.clone().with_order(new_order)
        })
        .collect();

    model.library_mut().set_all(reranked)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Source moved from position {} to {}: {}",
            from, to, target
        )))
        .with_listed_sources(model.displayed(Collection::Library)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::pinning;
    use crate::test_utils::{displayed_titles, index, model_with};

    #[test]
    fn moves_first_to_last() {
        let mut model = model_with(&["A", "B", "C"]);
        let result = run(&mut model, index(1), index(3)).unwrap();

        assert_eq!(
            displayed_titles(&model, Collection::Library),
            vec!["B", "C", "A"]
        );
        let listed: Vec<&str> = result
            .listed_sources
            .iter()
            .map(|dp| dp.source.title())
            .collect();
        assert_eq!(listed, vec!["B", "C", "A"]);
        assert!(model.library().is_dirty());
    }

    #[test]
    fn moves_last_to_first() {
        let mut model = model_with(&["A", "B", "C", "D"]);
        run(&mut model, index(4), index(2)).unwrap();

        assert_eq!(
            displayed_titles(&model, Collection::Library),
            vec!["A", "D", "B", "C"]
        );
    }

    #[test]
    fn ranks_stay_unique() {
        let mut model = model_with(&["A", "B", "C", "D"]);
        run(&mut model, index(2), index(4)).unwrap();
        run(&mut model, index(4), index(1)).unwrap();

        let mut ranks: Vec<u64> = model.library().iter().map(|s| s.order()).collect();
        ranks.sort();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn same_position_is_a_no_op() {
        let mut model = model_with(&["A", "B"]);
        run(&mut model, index(2), index(2)).unwrap();
        assert!(!model.library().is_dirty());
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut model = model_with(&["A", "B", "C"]);
        let err = run(&mut model, index(1), index(4)).unwrap_err();
        assert!(matches!(err, SourcepadError::Command(_)));
        assert!(!model.library().is_dirty());
        assert_eq!(
            displayed_titles(&model, Collection::Library),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn pinned_sources_stay_on_top() {
        let mut model = model_with(&["A", "B", "C"]);
        pinning::pin(&mut model, index(3)).unwrap();
        // view: C (pinned), A, B
        run(&mut model, index(2), index(3)).unwrap();

        assert_eq!(
            displayed_titles(&model, Collection::Library),
            vec!["C", "B", "A"]
        );
    }

    #[test]
    fn moves_across_pin_boundary_are_rejected() {
        let mut model = model_with(&["A", "B", "C"]);
        pinning::pin(&mut model, index(3)).unwrap();
        model.mark_clean();
        // view: C (pinned), A, B

        for (from, to) in [(1, 3), (3, 1)] {
            let err = run(&mut model, index(from), index(to)).unwrap_err();
            assert!(matches!(err, SourcepadError::Command(_)));
            assert!(err.to_string().contains("pin or unpin"));
        }

        assert!(!model.library().is_dirty());
        assert_eq!(
            displayed_titles(&model, Collection::Library),
            vec!["C", "A", "B"]
        );
    }

    #[test]
    fn pinned_sources_reorder_among_themselves() {
        let mut model = model_with(&["A", "B", "C"]);
        pinning::pin(&mut model, index(1)).unwrap();
        pinning::pin(&mut model, index(3)).unwrap();
        // view: A, C (pinned), B
        run(&mut model, index(2), index(1)).unwrap();

        assert_eq!(
            displayed_titles(&model, Collection::Library),
            vec!["C", "A", "B"]
        );
    }
}
