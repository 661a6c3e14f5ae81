//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all catalog operations, regardless of the front end being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (a blank category filter is treated as "All")
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or HTTP status codes
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Shared Between Front Ends
//!
//! The HTTP adapter and the CLI both hold a `ShelfApi`. All operations take
//! `&self`, so the HTTP adapter can share one instance across requests behind an
//! `Arc` without a mutex. That also means concurrent mutations are not serialized;
//! see the storage layer docs for the lost-update caveat.
//!
//! ## Generic Over DataStore
//!
//! `ShelfApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{BookInput, ALL_CATEGORIES};
use crate::store::DataStore;
use std::path::PathBuf;

/// The main API facade for catalog operations.
pub struct ShelfApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> ShelfApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_books(&self, category: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, normalize_category(category))
    }

    pub fn search_books(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn add_book(&self, input: BookInput) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, input)
    }

    pub fn delete_book(&self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, id)
    }

    pub fn erase_books(&self) -> Result<commands::CmdResult> {
        commands::erase::run(&self.store)
    }

    pub fn seed(&self) -> Result<commands::CmdResult> {
        commands::seed::run(&self.store)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::report::categories(&self.store)
    }

    pub fn summary(&self) -> Result<commands::CmdResult> {
        commands::report::summary(&self.store)
    }

    pub fn location(&self) -> PathBuf {
        self.store.location()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Blank filters (as sent by an empty query string) mean "All".
fn normalize_category(category: Option<&str>) -> Option<&str> {
    match category {
        Some(c) if c.trim().is_empty() || c == ALL_CATEGORIES => None,
        other => other,
    }
}

pub use crate::commands::{CatalogSummary, CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> ShelfApi<InMemoryStore> {
        let api = ShelfApi::new(InMemoryStore::new());
        api.add_book(BookInput::new("Test Book", "Me").with_date(2025))
            .unwrap();
        api.add_book(BookInput::new("Tulips", "Sylvia Plath").with_category("Poetry"))
            .unwrap();
        api
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category(None), None);
        assert_eq!(normalize_category(Some("")), None);
        assert_eq!(normalize_category(Some("All")), None);
        assert_eq!(normalize_category(Some("Poetry")), Some("Poetry"));
    }

    #[test]
    fn test_list_dispatch() {
        let api = api();
        assert_eq!(api.list_books(None).unwrap().listed_books.len(), 2);
        assert_eq!(api.list_books(Some("")).unwrap().listed_books.len(), 2);
        assert_eq!(api.list_books(Some("Poetry")).unwrap().listed_books.len(), 1);
    }

    #[test]
    fn test_search_dispatch() {
        let api = api();
        let result = api.search_books("TEST").unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].name, "Test Book");
    }

    #[test]
    fn test_add_returns_new_book() {
        let api = api();
        let result = api.add_book(BookInput::new("Third", "Someone")).unwrap();
        assert_eq!(result.affected_books.len(), 1);
        assert_eq!(result.affected_books[0].id, 3);
    }

    #[test]
    fn test_delete_and_erase_dispatch() {
        let api = api();
        api.delete_book(1).unwrap();
        assert_eq!(api.list_books(None).unwrap().listed_books.len(), 1);
        api.erase_books().unwrap();
        assert!(api.list_books(None).unwrap().listed_books.is_empty());
    }

    #[test]
    fn test_seed_skips_existing() {
        let api = api();
        let result = api.seed().unwrap();
        assert!(result.affected_books.is_empty());
        assert_eq!(api.list_books(None).unwrap().listed_books.len(), 2);
    }

    #[test]
    fn test_reports_dispatch() {
        let api = api();
        assert_eq!(api.categories().unwrap().categories, vec!["Novel", "Poetry"]);
        assert_eq!(api.summary().unwrap().summary.unwrap().total_books, 2);
    }
}
