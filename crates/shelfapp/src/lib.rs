//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic book catalog library**. The HTTP server and the terminal
//! client are front ends over the same core; neither holds any catalog logic.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front Ends                                                 │
//! │  - http.rs (feature "http"): axum JSON routes               │
//! │  - shelf binary: clap CLI, in-process calls                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, search, add, delete, erase, seed, reports          │
//! │  - Id assignment and input defaults                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait over a StorageBackend                    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Catalog File
//!
//! The whole catalog is one JSON array, loaded at the start of every operation and
//! rewritten in full by every mutation. There is no locking between the two, so
//! concurrent writers can lose updates. See [`store`] for the details.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//! 2. **Store** (`store/`): file round-trips and recovery in temp directories.
//! 3. **Front ends**: HTTP tests against a live server on an ephemeral port, and CLI
//!    end-to-end tests in the `shelf` crate.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book`, `BookInput`, and input coercion
//! - [`config`]: Configuration management
//! - [`init`]: Path resolution, store wiring and first-run seeding
//! - [`error`]: Error types
//! - `http`: axum router and server (feature `http`)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod init;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod test_utils;
