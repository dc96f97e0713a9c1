//! # Configuration
//!
//! Shelf configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `SHELF__BOOKS_KEY`, `SHELF__PRETTY_JSON`, etc.
//! 2. **Data directory config**: `<data dir>/shelf.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `books_key` | `library-books` | Store key holding the book collection |
//! | `theme_key` | `dark-mode` | Store key holding the dark-mode flag |
//! | `pretty_json` | `true` | Pretty-print the persisted JSON |
//!
//! The two keys name independent cells. Pointing them at another name starts a
//! fresh catalog without touching the old one.

use confique::Config;
use serde::{Deserialize, Serialize};

/// Configuration for shelf, stored in `shelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Store key for the book collection
    #[config(default = "library-books")]
    pub books_key: String,

    /// Store key for the dark-mode preference
    #[config(default = "dark-mode")]
    pub theme_key: String,

    /// Pretty-print persisted JSON
    #[config(default = true)]
    pub pretty_json: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            books_key: "library-books".to_string(),
            theme_key: "dark-mode".to_string(),
            pretty_json: true,
        }
    }
}

impl ShelfConfig {
    /// Resolved values as `(key, value)` rows, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("books_key", self.books_key.clone()),
            ("theme_key", self.theme_key.clone()),
            ("pretty_json", self.pretty_json.to_string()),
        ]
    }
}
