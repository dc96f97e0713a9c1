//! # Persistent State Cell
//!
//! A [`PersistentCell`] is a typed value with a durable shadow: it lives in memory,
//! and every change is written through to a [`KeyValueStore`] under a fixed key.
//!
//! ## Lifecycle
//!
//! 1. **Construction** reads the key once.
//!    - Absent → the supplied default ([`LoadState::Missing`]).
//!    - Present and parseable → the stored value ([`LoadState::Restored`]).
//!    - Present but corrupt, or the read itself failed → the default, with a
//!      warning logged ([`LoadState::Recovered`]). Construction never fails.
//! 2. **Updates** ([`PersistentCell::set`], [`PersistentCell::update`]) replace the
//!    in-memory value first, then serialize it and write it to the store.
//! 3. There is no teardown. The store outlives the process.
//!
//! ## The In-Memory Value Wins
//!
//! A failed write does not roll anything back. The session keeps running on the
//! in-memory value and the failure goes to a side channel:
//!
//! - a `tracing` error event,
//! - the optional [`PersistentCell::on_write_error`] hook,
//! - [`PersistentCell::last_write_error`], until the next successful write.
//!
//! The cell remembers that the durable copy is behind ([`PersistentCell::is_dirty`]).
//! [`PersistentCell::flush`] makes one more attempt and returns its result. Nothing
//! retries on its own.
//!
//! ## Sharing a Store
//!
//! Shelf keeps two cells (the collection and the theme flag) over one store.
//! Pass an `Rc<S>` as the store: `Rc` implements [`KeyValueStore`] by delegation.

use crate::error::{Result, ShelfError};
use crate::store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

/// How a cell obtained its initial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Missing,
    Restored,
    Recovered,
}

/// Called with the key and the error whenever a write-through fails.
pub type WriteErrorHook = Box<dyn FnMut(&str, &ShelfError)>;

pub struct PersistentCell<T, S: KeyValueStore> {
    store: S,
    key: String,
    value: T,
    load_state: LoadState,
    pretty: bool,
    dirty: bool,
    last_write_error: Option<ShelfError>,
    on_write_error: Option<WriteErrorHook>,
}

impl<T, S> PersistentCell<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub fn new(store: S, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let (value, load_state) = match store.read_raw(&key) {
            Ok(None) => (default, LoadState::Missing),
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => {
                    debug!(key = %key, "Restored persisted value");
                    (value, LoadState::Restored)
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Stored value is unreadable, using default");
                    (default, LoadState::Recovered)
                }
            },
            Err(e) => {
                warn!(key = %key, error = %e, "Could not read stored value, using default");
                (default, LoadState::Recovered)
            }
        };

        Self {
            store,
            key,
            value,
            load_state,
            pretty: false,
            dirty: false,
            last_write_error: None,
            on_write_error: None,
        }
    }

    /// Pretty-print the JSON written to the store.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Register a hook that runs on every failed write-through.
    pub fn on_write_error(mut self, hook: WriteErrorHook) -> Self {
        self.on_write_error = Some(hook);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// True when the last write-through failed and the store holds an older value.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn last_write_error(&self) -> Option<&ShelfError> {
        self.last_write_error.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the value and write it through.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.write_through();
    }

    /// Compute the next value from the current one and write it through.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.set(next);
    }

    /// Write the current value to the store once more.
    pub fn flush(&mut self) -> Result<()> {
        self.persist()?;
        self.dirty = false;
        self.last_write_error = None;
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let raw = if self.pretty {
            serde_json::to_string_pretty(&self.value)
        } else {
            serde_json::to_string(&self.value)
        }
        .map_err(ShelfError::Serialization)?;
        self.store.write_raw(&self.key, &raw)
    }

    fn write_through(&mut self) {
        match self.persist() {
            Ok(()) => {
                self.dirty = false;
                self.last_write_error = None;
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "Write-through failed, keeping in-memory value");
                if let Some(hook) = self.on_write_error.as_mut() {
                    hook(&self.key, &e);
                }
                self.dirty = true;
                self.last_write_error = Some(e);
            }
        }
    }
}
