use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewRecord;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, input: NewRecord) -> Result<CmdResult> {
    let record = store.create(input)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added: {} ({})",
        record.name, record.id
    )));
    result.affected_records.push(record);
    Ok(result)
}
