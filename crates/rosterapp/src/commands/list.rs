use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordFilter;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, filter: &RecordFilter) -> Result<CmdResult> {
    let records = store.read_filtered(filter);
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No students found."));
    }
    Ok(result.with_listed_records(records))
}
