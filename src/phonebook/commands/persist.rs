use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DirectoryError, Result};
use crate::model::Record;
use crate::store::DataStore;
use tracing::debug;

/// Loads the Record Set, degrading a missing or malformed store to an empty set.
///
/// The degraded cases come back as `Ok` with a warning message naming the reason.
/// Any other I/O failure is returned as an error.
pub fn load<S: DataStore>(store: &S) -> Result<(Vec<Record>, CmdResult)> {
    let mut result = CmdResult::default();
    match store.load() {
        Ok(records) => Ok((records, result)),
        Err(DirectoryError::StoreNotFound(path)) => {
            debug!(path = %path.display(), "store not found");
            result.add_message(CmdMessage::warning(format!(
                "Store {} not found. Starting with an empty directory.",
                path.display()
            )));
            Ok((Vec::new(), result))
        }
        Err(DirectoryError::StoreMalformed { path, source }) => {
            debug!(path = %path.display(), error = %source, "store malformed");
            result.add_message(CmdMessage::warning(format!(
                "Store {} could not be read, check its JSON format ({}). Starting with an empty directory.",
                path.display(),
                source
            )));
            Ok((Vec::new(), result))
        }
        Err(e) => Err(e),
    }
}

/// Writes the full Record Set, replacing whatever the store held.
pub fn save<S: DataStore>(store: &mut S, records: &[Record]) -> Result<CmdResult> {
    store.save(records)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Saved {} record(s) to {}",
        records.len(),
        store.location()
    )));
    Ok(result)
}
