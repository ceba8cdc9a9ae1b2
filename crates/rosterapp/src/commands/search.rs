use crate::algo::{search_records, sort_records, Direction, SearchAlgorithm, SortAlgorithm};
use crate::commands::{AlgorithmRun, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Field;
use crate::store::DataStore;

/// Searches the current snapshot for `target` in `field`.
///
/// Binary search first merge-sorts the snapshot ascending by `field`; the
/// sorted snapshot is returned in `listed_records` so the reported index
/// points into it.
pub fn run<S: DataStore>(
    store: &S,
    field: Field,
    target: &str,
    algorithm: SearchAlgorithm,
) -> Result<CmdResult> {
    let mut snapshot = store.read_all();
    let mut result = CmdResult::default();

    if algorithm == SearchAlgorithm::Binary {
        let sorted = sort_records(&snapshot, field, Direction::Ascending, SortAlgorithm::Merge);
        result.add_message(CmdMessage::info(format!(
            "Sorted by {} before searching ({} comparisons)",
            field, sorted.comparisons
        )));
        snapshot = sorted.items;
    }

    let outcome = search_records(&snapshot, field, target, algorithm);
    match outcome.index {
        Some(index) => {
            result.add_message(CmdMessage::success(format!(
                "Found '{}' in {} at position {} after {} comparisons",
                target,
                field,
                index + 1,
                outcome.comparisons
            )));
            result.affected_records.push(snapshot[index].clone());
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No student matches '{}' in {} ({} comparisons)",
                target, field, outcome.comparisons
            )));
        }
    }

    result.run = Some(AlgorithmRun {
        algorithm: algorithm.as_str(),
        field,
        input_len: snapshot.len(),
        comparisons: outcome.comparisons,
        index: outcome.index,
        complexity: algorithm.complexity(),
    });
    Ok(result.with_listed_records(snapshot))
}
