use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct CatalogStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> CatalogStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Decodes raw catalog text. Only text that is not a JSON array fails; within
    /// the array, fields decode leniently and entries that are not records at all
    /// are skipped with a warning.
    fn decode(raw: &str) -> Result<Vec<Book>> {
        let entries: Vec<Value> = serde_json::from_str(raw).map_err(ShelfError::Serialization)?;
        let books = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Book>(entry) {
                Ok(book) => Some(book),
                Err(e) => {
                    warn!(index, error = %e, "skipping catalog entry that is not a book");
                    None
                }
            })
            .collect();
        Ok(books)
    }
}

impl<B: StorageBackend> DataStore for CatalogStore<B> {
    fn load_books(&self) -> Vec<Book> {
        let raw = match self.backend.read_catalog() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(path = %self.backend.location().display(), "catalog absent, reading as empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    path = %self.backend.location().display(),
                    error = %e,
                    "catalog unreadable, reading as empty"
                );
                return Vec::new();
            }
        };

        match Self::decode(&raw) {
            Ok(books) => {
                debug!(count = books.len(), "catalog loaded");
                books
            }
            Err(e) => {
                // The next save overwrites the corrupt file.
                warn!(
                    path = %self.backend.location().display(),
                    error = %e,
                    "catalog is not a valid book array, reading as empty"
                );
                Vec::new()
            }
        }
    }

    fn save_books(&self, books: &[Book]) -> Result<()> {
        let content = serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)?;
        self.backend.write_catalog(&content)?;
        debug!(count = books.len(), "catalog saved");
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.backend.exists()
    }

    fn location(&self) -> PathBuf {
        self.backend.location()
    }
}
