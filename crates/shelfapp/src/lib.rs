//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic library catalog**: a list of books, each with a status,
//! kept in a durable key-value store. The CLI in `crates/shelf` is one client of
//! it. Nothing here writes to a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The application shell: owns the collection, the theme    │
//! │    flag and the transient view state                        │
//! │  - Form flow, selectors → books                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Operations (records.rs)                             │
//! │  - createRecord / updateRecord / filterRecords, pure        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistent State Cell (cell.rs) over a Store (store/)      │
//! │  - Write-through, corrupt data falls back to the default    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! Record operations and commands carry most of the unit tests, all against
//! [`store::mem_backend::MemBackend`]. The filesystem store and startup have
//! integration tests under `tests/` using temporary directories.
//!
//! ## Module Overview
//!
//! - [`api`]: The application shell
//! - [`cell`]: Persistent state cell
//! - [`commands`]: Per-operation business logic
//! - [`config`]: `shelf.toml` settings
//! - [`error`]: Error type
//! - [`form`]: Form validation
//! - [`index`]: Canonical positions and selectors
//! - [`init`]: Data directory resolution and startup
//! - [`model`]: Book, status and input types
//! - [`records`]: Pure record operations
//! - [`store`]: Key-value storage backends
//! - `test_utils`: In-memory fixtures (`test_utils` feature)

pub mod api;
pub mod cell;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod index;
pub mod init;
pub mod model;
pub mod records;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
