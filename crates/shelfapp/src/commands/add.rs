use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, BookInput};
use crate::store::DataStore;

/// Next id for a new book: one past the current maximum, or 1 when empty.
///
/// Ids are not monotonic across deletes. Removing the book holding the
/// maximum id frees that id for the next `add`.
pub fn next_id(books: &[Book]) -> u64 {
    books.iter().map(|b| b.id).max().unwrap_or(0) + 1
}

pub fn run<S: DataStore>(store: &S, input: BookInput) -> Result<CmdResult> {
    let mut books = store.load_books();
    let book = Book::from_input(next_id(&books), input);
    books.push(book.clone());
    store.save_books(&books)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        book.id, book.name
    )));
    if book.name.trim().is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Book {} was added without a title",
            book.id
        )));
    }
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{delete, list, MessageLevel};
    use crate::error::ShelfError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn test_book() -> BookInput {
        BookInput::new("Test Book", "Me")
            .with_date(2025)
            .with_category("Novel")
    }

    #[test]
    fn first_book_gets_id_one() {
        let store = InMemoryStore::new();
        let result = run(&store, test_book()).unwrap();
        assert_eq!(result.affected_books[0].id, 1);

        let result = run(&store, test_book()).unwrap();
        assert_eq!(result.affected_books[0].id, 2);
    }

    #[test]
    fn ids_increase_by_one() {
        let store = InMemoryStore::new();
        for _ in 0..5 {
            run(&store, test_book()).unwrap();
        }
        let listed = list::run(&store, None).unwrap().listed_books;
        let ids: Vec<u64> = listed.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn continues_after_max_not_count() {
        let f = StoreFixture::new()
            .with_book(2, "A", "Novel")
            .with_book(9, "B", "Novel");
        let result = run(&f.store, test_book()).unwrap();
        assert_eq!(result.affected_books[0].id, 10);
    }

    #[test]
    fn deleted_max_id_is_reused() {
        let store = InMemoryStore::new();
        run(&store, test_book()).unwrap();
        run(&store, test_book()).unwrap();
        delete::run(&store, 2).unwrap();

        let result = run(&store, test_book()).unwrap();
        assert_eq!(result.affected_books[0].id, 2);
    }

    #[test]
    fn coerces_bad_date_and_blank_category() {
        let store = InMemoryStore::new();
        let input = BookInput::new("X", "Y")
            .with_date("not-a-number")
            .with_category("");
        let book = run(&store, input).unwrap().affected_books.remove(0);
        assert_eq!(book.date, 0);
        assert_eq!(book.category, "Novel");
    }

    #[test]
    fn appends_to_end_and_persists() {
        let f = StoreFixture::new().with_book(1, "First", "Poetry");
        run(&f.store, test_book()).unwrap();

        let listed = f.store.load_books();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].name, "Test Book");
    }

    #[test]
    fn write_failure_propagates() {
        let store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);
        let err = run(&store, test_book()).unwrap_err();
        assert!(matches!(err, ShelfError::Store(_)));
        assert!(store.load_books().is_empty());
    }

    #[test]
    fn untitled_book_is_added_with_warning() {
        let store = InMemoryStore::new();
        let result = run(&store, BookInput::default()).unwrap();
        assert_eq!(result.affected_books[0].id, 1);
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
    }

    #[test]
    fn titled_book_has_no_warning() {
        let store = InMemoryStore::new();
        let result = run(&store, test_book()).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn next_id_of_empty_is_one() {
        assert_eq!(next_id(&[]), 1);
    }
}
