use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, RecordFields};
use tracing::debug;

/// One greater than the largest id in the set, or 1 for an empty set.
/// Deleting the highest record therefore frees its id for the next add.
pub fn next_id(records: &[Record]) -> u64 {
    records.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
}

pub fn run(records: &mut Vec<Record>, fields: RecordFields) -> Result<CmdResult> {
    let record = Record::new(next_id(records), fields);
    records.push(record.clone());
    debug!(id = record.id, "record added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record added ({}): {} {}",
        records.len(),
        record.surname,
        record.first_name
    )));
    Ok(result.with_affected_records(vec![record]))
}
