use super::catalog_store::CatalogStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = CatalogStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        CatalogStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, BookInput};
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Append a book with an explicit id, bypassing id assignment.
        pub fn with_book(self, id: u64, name: &str, category: &str) -> Self {
            let mut books = self.store.load_books();
            books.push(Book::from_input(
                id,
                BookInput::new(name, "Fixture Author")
                    .with_date(2000)
                    .with_category(category),
            ));
            self.store.save_books(&books).unwrap();
            self
        }

        pub fn with_books(mut self, count: usize, category: &str) -> Self {
            let start = self.store.load_books().iter().map(|b| b.id).max().unwrap_or(0);
            for i in 1..=count as u64 {
                self = self.with_book(start + i, &format!("Test Book {}", start + i), category);
            }
            self
        }
    }
}
