//! # Context Initialization
//!
//! Front ends do not build stores by hand. They call [`initialize`], which resolves
//! where the catalog lives, loads configuration, and seeds a first-run catalog.
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override` (the CLI's `--data <dir>` flag), used as-is.
//! 2. `SHELF_DATA` environment variable. Primarily used by tests to isolate state.
//! 3. The OS-appropriate data directory (via the `directories` crate).
//!
//! The catalog file is `<data dir>/<data_file>` where `data_file` comes from
//! [`ShelfConfig`] (default `media.json`).
//!
//! ## Seeding
//!
//! When `seed_on_first_run` is on and the catalog file does not exist, the seed
//! command runs once here. A catalog that exists but is empty or corrupt is not
//! reseeded.

use crate::api::ShelfApi;
use crate::commands::seed;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchPath};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub const DATA_DIR_ENV: &str = "SHELF_DATA";

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub config: ShelfConfig,
    pub data_dir: PathBuf,
}

/// Resolve the data directory from the override, the environment, or the OS default.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Store("Could not determine data directory".to_string()))
}

/// Load `shelf.toml` from the data directory, falling back to defaults.
pub fn load_config(data_dir: &std::path::Path) -> ShelfConfig {
    Clapfig::builder()
        .app_name("shelf")
        .file_name("shelf.toml")
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .load()
        .unwrap_or_default()
}

/// Initialize the shelf context: resolve paths, load config, build the store,
/// and seed a first-run catalog.
pub fn initialize(data_override: Option<PathBuf>) -> Result<ShelfContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = load_config(&data_dir);
    initialize_with(data_dir, config)
}

/// Like [`initialize`], with the directory and configuration already decided.
pub fn initialize_with(data_dir: PathBuf, config: ShelfConfig) -> Result<ShelfContext> {
    let catalog_path = config.catalog_path(&data_dir);
    debug!(path = %catalog_path.display(), "using catalog");

    let api = ShelfApi::new(FileStore::new_fs(catalog_path));
    if config.seed_on_first_run {
        seed::run(api.store())?;
    }

    Ok(ShelfContext {
        api,
        config,
        data_dir,
    })
}
