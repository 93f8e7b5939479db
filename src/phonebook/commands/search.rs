use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, SearchCriteria};
use crate::page::positioned;

/// Exact-match search. Every non-empty criterion must equal the record's value;
/// empty criteria match everything. Original order is kept.
pub fn run(records: &[Record], criteria: &SearchCriteria) -> Result<CmdResult> {
    let listed: Vec<_> = positioned(records)
        .into_iter()
        .filter(|lr| criteria.matches(&lr.record))
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No records found."));
    }
    Ok(result.with_listed_records(listed))
}
