use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordPatch;
use crate::store::DataStore;

/// Applies `patch` to the record with `id`.
///
/// An empty patch writes nothing; the current record is still looked up so a
/// bad id is reported either way.
pub fn run<S: DataStore>(store: &mut S, id: &str, patch: RecordPatch) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if patch.is_empty() {
        let current = store.read_by_id(id)?;
        result.add_message(CmdMessage::info(format!(
            "Nothing to update for {}",
            current.id
        )));
        return Ok(result.with_listed_records(vec![current]));
    }

    let record = store.update(id, patch)?;
    result.add_message(CmdMessage::success(format!(
        "Student updated: {} ({})",
        record.name, record.id
    )));
    result.affected_records.push(record);
    Ok(result)
}
