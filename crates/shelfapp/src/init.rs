//! # Data Directory and Startup
//!
//! Shelf keeps everything (the catalog, the theme flag, the optional `shelf.toml`)
//! in one data directory. [`initialize`] resolves it, loads configuration from it
//! and opens a [`LibraryApi`] over a filesystem store rooted there.
//!
//! ## Resolution Order
//!
//! 1. An explicit override (the CLI's `--data DIR`).
//! 2. The `SHELF_DATA` environment variable. Tests use this to isolate state.
//! 3. The OS data directory for the app (via the `directories` crate), e.g.
//!    `~/.local/share/shelf` on Linux.
//! 4. `./.shelf`, when the OS gives no home directory at all.
//!
//! Nothing is created here. The directory appears on the first write.

use crate::api::LibraryApi;
use crate::config::ShelfConfig;
use crate::store::fs_backend::FsBackend;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable overriding the data directory.
pub const DATA_ENV: &str = "SHELF_DATA";

pub struct ShelfContext {
    pub api: LibraryApi<FsBackend>,
    pub config: ShelfConfig,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> PathBuf {
    if let Some(path) = data_override {
        return path;
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".shelf"))
}

/// Loads `shelf.toml` from `data_dir`, falling back to defaults.
pub fn load_config(data_dir: &std::path::Path) -> ShelfConfig {
    Clapfig::builder()
        .app_name("shelf")
        .file_name("shelf.toml")
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

pub fn initialize(data_override: Option<PathBuf>) -> ShelfContext {
    let data_dir = resolve_data_dir(data_override);
    let config = load_config(&data_dir);
    debug!(data_dir = %data_dir.display(), books_key = %config.books_key, "Initializing shelf");

    let store = FsBackend::new(data_dir.clone());
    let api = LibraryApi::new(store, &config);

    ShelfContext {
        api,
        config,
        data_dir,
    }
}
