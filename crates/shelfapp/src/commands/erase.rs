use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    store.save_books(&[])?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("All books erased"));
    Ok(result)
}
