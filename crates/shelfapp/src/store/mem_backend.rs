use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the command layer is
/// single-threaded. This keeps the `StorageBackend` trait on `&self`.
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from arbitrary raw text, e.g. a corrupt catalog.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(Some(raw.into())),
            simulate_write_error: RefCell::new(false),
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// The raw text last written, if any.
    pub fn raw(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn read_catalog(&self) -> Result<Option<String>> {
        Ok(self.content.borrow().clone())
    }

    fn write_catalog(&self, text: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        *self.content.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.content.borrow().is_some()
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://catalog.json")
    }
}
