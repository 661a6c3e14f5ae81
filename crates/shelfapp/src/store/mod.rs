//! # Storage Layer
//!
//! This module defines the storage abstraction for shelf. The [`DataStore`] trait
//! allows the application to work with different storage backends.
//!
//! ## One File, Whole-File Rewrites
//!
//! The catalog is a single JSON array. There is no index and no journal:
//!
//! 1. **Read**: every operation loads the whole array.
//! 2. **Write**: every mutation serializes the whole array and replaces the file.
//!
//! Writes go to a temp file in the same directory and are renamed into place, so
//! a crash leaves either the old catalog or the new one, never half of each.
//!
//! ## Recovery Policy
//!
//! - **Missing file**: an empty catalog.
//! - **Invalid JSON** (or JSON that is not an array): also an empty catalog. The
//!   problem is logged at `warn` and the corrupt content is overwritten by the next save.
//! - **Odd records**: `null` or mistyped fields take their defaults, and array
//!   entries that are not objects are skipped with a `warn`. The rest of the
//!   catalog still loads.
//! - **Write failure**: surfaced as an error. Nothing is swallowed on the way out.
//!
//! ## No Locking
//!
//! Nothing is held between a load and the following save. Two processes (or two
//! requests) mutating the same file concurrently can lose an update: the later
//! writer saves a catalog read before the earlier writer finished. This is a
//! known limitation of the format.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store over a JSON file at an injected path.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── shelf.toml      # Configuration (optional)
//! └── media.json      # The catalog
//! ```

use crate::error::Result;
use crate::model::Book;
use std::path::PathBuf;

pub mod backend;
pub mod catalog_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Abstract interface for catalog storage.
///
/// Loading never fails: unreadable storage reads as an empty catalog.
/// Saving replaces the whole catalog and reports failures.
pub trait DataStore {
    /// Load the full catalog in storage order
    fn load_books(&self) -> Vec<Book>;

    /// Replace the full catalog
    fn save_books(&self, books: &[Book]) -> Result<()>;

    /// Whether a catalog has been written before (used by seeding)
    fn is_initialized(&self) -> bool;

    /// Where the catalog lives
    fn location(&self) -> PathBuf;
}
