//! # CLI Layer
//!
//! The **only** place in the binary that:
//! - Initializes logging
//! - Resolves the data directory and builds the catalog context
//! - Decides between text and JSON output
//! - Starts the tokio runtime for `serve`
//!
//! Every handler is a call into `ShelfApi` followed by one render call.

use super::render;
use super::setup::{Cli, Commands, OutputFormat};
use clap::Parser;
use shelfapp::api::CmdResult;
use shelfapp::error::Result;
use shelfapp::http;
use shelfapp::init::{initialize, ShelfContext};
use shelfapp::model::BookInput;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a tracing filter, e.g. `SHELF_LOG=shelfapp=debug`.
pub const LOG_ENV: &str = "SHELF_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = initialize(cli.data.clone())?;
    debug!(data_dir = %ctx.data_dir.display(), "context ready");

    let output = cli.output;
    match cli.command.unwrap_or(Commands::List { category: None }) {
        Commands::List { category } => {
            let result = ctx.api.list_books(category.as_deref())?;
            print_books(&result, output)
        }
        Commands::Search { term } => {
            let result = ctx.api.search_books(&term)?;
            print_books(&result, output)
        }
        Commands::Add {
            name,
            author,
            date,
            category,
        } => {
            let mut input = BookInput::new(name, author);
            if let Some(date) = date {
                input = input.with_date(date);
            }
            if let Some(category) = category {
                input = input.with_category(category);
            }
            let result = ctx.api.add_book(input)?;
            print_outcome(&result, output)
        }
        Commands::Delete { id } => {
            let result = ctx.api.delete_book(id)?;
            print_outcome(&result, output)
        }
        Commands::Erase => {
            let result = ctx.api.erase_books()?;
            print_outcome(&result, output)
        }
        Commands::Seed => {
            let result = ctx.api.seed()?;
            print_outcome(&result, output)
        }
        Commands::Categories => {
            let result = ctx.api.categories()?;
            match output {
                OutputFormat::Text => print!("{}", render::render_categories(&result.categories)),
                OutputFormat::Json => println!("{}", render::render_json(&result.categories)?),
            }
            Ok(())
        }
        Commands::Summary => {
            let result = ctx.api.summary()?;
            if let Some(summary) = &result.summary {
                match output {
                    OutputFormat::Text => print!("{}", render::render_summary(summary)),
                    OutputFormat::Json => println!("{}", render::render_json(summary)?),
                }
            }
            Ok(())
        }
        Commands::Path => {
            let location = ctx.api.location();
            match output {
                OutputFormat::Text => println!("{}", location.display()),
                OutputFormat::Json => println!(
                    "{}",
                    render::render_json(&serde_json::json!({ "path": location }))?
                ),
            }
            Ok(())
        }
        Commands::Serve { host, port } => serve(ctx, host, port),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A subscriber may already be installed when run inside a test harness.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn print_books(result: &CmdResult, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => print!("{}", render::render_book_list(&result.listed_books)),
        OutputFormat::Json => println!("{}", render::render_json(&result.listed_books)?),
    }
    Ok(())
}

fn print_outcome(result: &CmdResult, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => print!("{}", render::render_messages(&result.messages)),
        OutputFormat::Json => println!("{}", render::render_json(result)?),
    }
    Ok(())
}

fn serve(ctx: ShelfContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = ctx.config.clone();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    let addr = config.bind_addr();

    println!("Serving {} on http://{}", ctx.api.location().display(), addr);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(http::serve(Arc::new(ctx.api), &addr))?;
    Ok(())
}
