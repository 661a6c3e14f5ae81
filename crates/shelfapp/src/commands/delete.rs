use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Removes every book with `id`. Deleting an id that is not present still
/// rewrites the catalog and succeeds.
pub fn run<S: DataStore>(store: &S, id: u64) -> Result<CmdResult> {
    let books = store.load_books();
    let (removed, kept): (Vec<_>, Vec<_>) = books.into_iter().partition(|book| book.id == id);
    store.save_books(&kept)?;

    let mut result = CmdResult::default();
    match removed.first() {
        Some(book) => result.add_message(CmdMessage::success(format!(
            "Book deleted ({}): {}",
            id, book.name
        ))),
        None => result.add_message(CmdMessage::info(format!(
            "No book with id {}, nothing to delete",
            id
        ))),
    }
    Ok(result)
}
