use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let statistics = store.statistics();
    let mut result = CmdResult::default();
    if statistics.total == 0 {
        result.add_message(CmdMessage::info("No students yet."));
    }
    result.statistics = Some(statistics);
    Ok(result)
}
