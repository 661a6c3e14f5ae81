use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, term: &str) -> Result<CmdResult> {
    let matches = store
        .load_books()
        .into_iter()
        .filter(|book| book.name_contains(term))
        .collect();

    Ok(CmdResult::default().with_listed_books(matches))
}
