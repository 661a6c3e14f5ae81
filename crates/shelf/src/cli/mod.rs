//! # CLI Behavior
//!
//! This is **one client** of the catalog. It is the only place that knows about
//! terminal I/O, exit codes and output formatting.
//!
//! Running `shelf` with no subcommand lists the whole catalog.
//!
//! ## Output Modes
//!
//! - `--output text` (default): aligned tables and colored status messages.
//! - `--output json`: the raw records or report as JSON, for scripting.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap, version string
//! - `commands`: Context setup, logging, dispatch to the API
//! - `render`: Tables, messages and JSON

mod commands;
mod render;
pub mod setup;

pub use commands::run;
