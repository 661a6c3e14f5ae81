//! # Configuration
//!
//! Shelf configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `SHELF__DATA_FILE`, `SHELF__PORT`, etc.
//! 2. **Data dir config**: `<data dir>/shelf.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `media.json` | Catalog file, relative to the data dir (or absolute) |
//! | `host` | `localhost` | Bind host for `shelf serve` |
//! | `port` | `5000` | Bind port for `shelf serve` |
//! | `seed_on_first_run` | `true` | Write the starter catalog when none exists |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for shelf, stored in `shelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Catalog file name. Relative paths resolve against the data directory.
    #[config(default = "media.json")]
    pub data_file: String,

    /// Host the HTTP adapter binds to.
    #[config(default = "localhost")]
    pub host: String,

    /// Port the HTTP adapter binds to.
    #[config(default = 5000)]
    pub port: u16,

    /// Seed the starter catalog when the catalog file does not exist.
    #[config(default = true)]
    pub seed_on_first_run: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: "media.json".to_string(),
            host: "localhost".to_string(),
            port: 5000,
            seed_on_first_run: true,
        }
    }
}

impl ShelfConfig {
    /// Resolve the catalog path against `data_dir`. An absolute `data_file`
    /// wins over the directory.
    pub fn catalog_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
