use crate::algo::{sort_records, Direction, SortAlgorithm};
use crate::commands::{AlgorithmRun, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Field;
use crate::store::DataStore;

/// Sorts the current snapshot. The store itself is left in insertion order.
pub fn run<S: DataStore>(
    store: &S,
    field: Field,
    direction: Direction,
    algorithm: SortAlgorithm,
) -> Result<CmdResult> {
    let snapshot = store.read_all();
    let outcome = sort_records(&snapshot, field, direction, algorithm);
    let complexity = algorithm.complexity();

    let mut result = CmdResult::default();
    if snapshot.is_empty() {
        result.add_message(CmdMessage::info("No students to sort."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{}: {} records by {} in {} comparisons",
            complexity.name,
            snapshot.len(),
            field,
            outcome.comparisons
        )));
    }
    result.run = Some(AlgorithmRun {
        algorithm: algorithm.as_str(),
        field,
        input_len: snapshot.len(),
        comparisons: outcome.comparisons,
        index: None,
        complexity,
    });
    Ok(result.with_listed_records(outcome.items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewRecord;
    use crate::store::mem_backend::MemBackend;
    use crate::store::record_store::RecordStore;

    fn seeded() -> RecordStore<MemBackend> {
        let mut store = RecordStore::open(MemBackend::new()).unwrap();
        for (name, id, year) in [
            ("Zulu", "50000001", 2019),
            ("Beta", "50000002", 2023),
            ("Alpha", "50000003", 2021),
        ] {
            store
                .create(
                    NewRecord::new(name, id, "Teknik", "x@mail.com").with_entry_year(year),
                )
                .unwrap();
        }
        store
    }

    fn names(result: &CmdResult) -> Vec<&str> {
        result
            .listed_records
            .iter()
            .map(|r| r.name.as_str())
            .collect()
    }

    #[test]
    fn sorts_names_with_each_algorithm() {
        let store = seeded();
        for algorithm in SortAlgorithm::ALL {
            let result = run(&store, Field::Name, Direction::Ascending, algorithm).unwrap();
            assert_eq!(names(&result), vec!["Alpha", "Beta", "Zulu"]);
            let report = result.run.unwrap();
            assert_eq!(report.algorithm, algorithm.as_str());
            assert_eq!(report.input_len, 3);
            assert!(report.comparisons > 0);
        }
    }

    #[test]
    fn sort_does_not_reorder_the_store() {
        let store = seeded();
        run(&store, Field::EntryYear, Direction::Descending, SortAlgorithm::Shell).unwrap();
        let stored: Vec<String> = store.read_all().into_iter().map(|r| r.name).collect();
        assert_eq!(stored, vec!["Zulu", "Beta", "Alpha"]);
    }

    #[test]
    fn descending_by_year() {
        let result = run(
            &seeded(),
            Field::EntryYear,
            Direction::Descending,
            SortAlgorithm::Bubble,
        )
        .unwrap();
        assert_eq!(names(&result), vec!["Beta", "Alpha", "Zulu"]);
    }

    #[test]
    fn empty_store() {
        let store = RecordStore::open(MemBackend::new()).unwrap();
        let result = run(&store, Field::Name, Direction::Ascending, SortAlgorithm::Merge).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.run.unwrap().comparisons, 0);
        assert_eq!(result.messages[0].content, "No students to sort.");
    }
}
