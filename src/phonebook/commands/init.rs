use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Creates an empty store unless one already exists. Existing data is never touched.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.exists() {
        result.add_message(CmdMessage::info(format!(
            "Store already exists at {}",
            store.location()
        )));
        return Ok(result);
    }

    store.save(&[])?;
    result.add_message(CmdMessage::success(format!(
        "Initialized empty store at {}",
        store.location()
    )));
    Ok(result)
}
