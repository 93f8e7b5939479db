use crate::error::{DirectoryError, Result};
use crate::model::Record;

/// Converts a 1-based position into a vector index, rejecting anything outside `1..=len`.
pub fn position_to_index(records: &[Record], position: usize) -> Result<usize> {
    if position == 0 || position > records.len() {
        return Err(DirectoryError::InvalidPosition {
            position,
            len: records.len(),
        });
    }
    Ok(position - 1)
}

pub fn record_at(records: &[Record], position: usize) -> Result<&Record> {
    let index = position_to_index(records, position)?;
    Ok(&records[index])
}
