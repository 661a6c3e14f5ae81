use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    bin_name = "shelf",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "A small book catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory holding the catalog and shelf.toml (default: $SHELF_DATA, then the OS data dir)
    #[arg(long, global = true, help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, help_heading = "Options")]
    pub output: OutputFormat,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List books, optionally filtered by category
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Category to show ("All" shows everything)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Search books by title (case-insensitive substring)
    #[command(display_order = 2)]
    Search { term: String },

    /// Add a book
    #[command(alias = "n", display_order = 3)]
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        author: String,

        /// Publication year; anything that is not an integer is stored as 0
        #[arg(long)]
        date: Option<String>,

        /// Category (defaults to Novel)
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete the book with the given id
    #[command(alias = "rm", display_order = 4)]
    Delete { id: u64 },

    /// Remove every book from the catalog
    #[command(display_order = 5)]
    Erase,

    /// Write the starter catalog if no catalog exists yet
    #[command(display_order = 10)]
    Seed,

    /// List the distinct categories
    #[command(display_order = 11)]
    Categories,

    /// Totals per category
    #[command(display_order = 12)]
    Summary,

    /// Print the catalog file location
    #[command(display_order = 13)]
    Path,

    /// Serve the catalog over HTTP
    #[command(display_order = 20)]
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
}
