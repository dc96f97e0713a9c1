//! # Storage Layer
//!
//! Shelf persists through a deliberately small contract: a durable key-value
//! store holding one string per key. The [`KeyValueStore`] trait is that
//! contract, and nothing above it knows which medium sits underneath.
//!
//! ## The Contract
//!
//! - [`KeyValueStore::read_raw`]: `Ok(None)` when the key has never been written,
//!   `Err` only on a real failure (permissions, disk).
//! - [`KeyValueStore::write_raw`]: replaces the value for the key. A failed write
//!   must leave the previous value intact.
//!
//! Values are opaque strings here. Serialization is the job of
//! [`crate::cell::PersistentCell`], which sits directly on top of a store.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key in a data directory.
//! - [`mem_backend::MemBackend`]: a map in memory, for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── shelf.toml           # Configuration (optional)
//! ├── library-books.json   # The collection cell
//! └── dark-mode.json       # The theme cell
//! ```

use crate::error::Result;
use std::rc::Rc;

pub mod fs_backend;
pub mod mem_backend;

/// Durable key-value storage for raw strings.
///
/// Methods take `&self`: shelf is single-threaded and several cells share one
/// store, so implementations handle their own interior mutability.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    fn read_raw(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn write_raw(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        (**self).read_raw(key)
    }

    fn write_raw(&self, key: &str, value: &str) -> Result<()> {
        (**self).write_raw(key, value)
    }
}
