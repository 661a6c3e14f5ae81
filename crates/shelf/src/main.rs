//! # Shelf CLI
//!
//! The binary is thin: argument parsing, rendering and the `serve` runtime live in
//! `src/cli/`, and every catalog operation goes through `shelfapp::api::ShelfApi`.
//! This file only invokes `cli::run()` and turns an error into exit code 1.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/shelf/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Tables, messages, JSON output (render.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  shelfapp: api.rs → commands/ → store/                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! `shelf serve` starts the library's axum router on a tokio runtime, so the
//! HTTP front end and the terminal front end share one catalog file format and
//! one set of rules.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
