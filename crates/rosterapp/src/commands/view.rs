use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let record = store.read_by_id(id)?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::model::NewRecord;
    use crate::store::mem_backend::MemBackend;
    use crate::store::record_store::RecordStore;

    #[test]
    fn returns_the_record() {
        let mut store = RecordStore::open(MemBackend::new()).unwrap();
        store
            .create(NewRecord::new("Dewi Lestari", "55555555", "Biologi", "dewi@mail.com"))
            .unwrap();
        let result = run(&store, " 55555555 ").unwrap();
        assert_eq!(result.listed_records[0].name, "Dewi Lestari");
    }

    #[test]
    fn missing_id() {
        let store = RecordStore::open(MemBackend::new()).unwrap();
        assert!(matches!(run(&store, "99999999"), Err(RosterError::NotFound(_))));
    }
}
