//! Edit and delete by position.
//!
//! Both operations address a record by its 1-based position in the current Record Set,
//! not by id (see [`crate::page`]). A position outside `1..=len` leaves the set untouched
//! and returns [`DirectoryError::InvalidPosition`](crate::error::DirectoryError::InvalidPosition).

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, RecordFields};
use tracing::debug;

use super::helpers::position_to_index;

/// Overwrites every text field of the record at `position`. Blank values blank the field.
pub fn update(records: &mut [Record], position: usize, fields: RecordFields) -> Result<CmdResult> {
    let index = position_to_index(records, position)?;
    let record = &mut records[index];
    record.replace_fields(fields);
    debug!(position, id = record.id, "record updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record updated ({}): {} {}",
        position, record.surname, record.first_name
    )));
    Ok(result.with_affected_records(vec![record.clone()]))
}

/// Removes the record at `position`; later records move up by one.
pub fn delete(records: &mut Vec<Record>, position: usize) -> Result<CmdResult> {
    let index = position_to_index(records, position)?;
    let removed = records.remove(index);
    debug!(position, id = removed.id, "record deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record deleted ({}): {} {}",
        position, removed.surname, removed.first_name
    )));
    Ok(result.with_affected_records(vec![removed]))
}
