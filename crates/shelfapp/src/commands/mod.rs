//! # Command Layer
//!
//! This module contains the **core business logic** of shelf. Each command lives in its
//! own submodule and implements plain Rust functions over a [`DataStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Load the catalog, apply the operation, save when it mutates
//! - Operate on [`Book`] and [`BookInput`]
//! - Return structured [`CmdResult`] values with affected books and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any front-end I/O**: No stdout, HTTP status codes, or terminal concerns
//! - **Argument parsing**: That's the front end's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `listed_books`: Books to display (list, search)
//! - `affected_books`: Books created by the operation (add, seed)
//! - `categories` / `summary`: Catalog reports
//! - `messages`: Structured messages with levels (info, success, warning)
//!
//! An `Ok` result is the success flag for delete and erase; those never fail
//! on a missing id, only on a failed write.
//!
//! ## Command Modules
//!
//! - [`list`]: List books, optionally by category
//! - [`search`]: Case-insensitive title search
//! - [`add`]: Append a book with the next id
//! - [`delete`]: Remove a book by id
//! - [`erase`]: Empty the catalog
//! - [`seed`]: Write the starter catalog when none exists
//! - [`report`]: Category list and catalog summary
//!
//! [`DataStore`]: crate::store::DataStore
//! [`BookInput`]: crate::model::BookInput

use crate::model::Book;
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod erase;
pub mod list;
pub mod report;
pub mod search;
pub mod seed;

pub use report::CatalogSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub categories: Vec<String>,
    pub summary: Option<CatalogSummary>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_summary(mut self, summary: CatalogSummary) -> Self {
        self.summary = Some(summary);
        self
    }
}
