use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ALL_CATEGORIES;
use crate::store::DataStore;

/// Lists the catalog in storage order. `None` and `"All"` mean no filter;
/// anything else must equal a book's category exactly.
pub fn run<S: DataStore>(store: &S, category: Option<&str>) -> Result<CmdResult> {
    let books = store.load_books();

    let listed = match category {
        None | Some(ALL_CATEGORIES) => books,
        Some(category) => books
            .into_iter()
            .filter(|book| book.in_category(category))
            .collect(),
    };

    Ok(CmdResult::default().with_listed_books(listed))
}
