//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution (`shelf`)
//!
//! Running `shelf` with no arguments defaults to `shelf list`.
//!
//! ## Addressing Books
//!
//! Commands that take books accept selectors: a position as printed by `list`
//! (`3`), or a full book id. Positions never shift when a search or status
//! filter hides other books.
//!
//! ## Editing
//!
//! `shelf edit 2 --status issued` opens the edit form for book 2, applies only
//! the flags given, and submits. Fields left out keep their current value.
//!
//! ## Deleting
//!
//! `shelf delete` lists what it is about to remove and asks first. `--yes`
//! skips the question; so does a non-interactive stdin with `--yes`. Without
//! `--yes`, a non-interactive stdin that answers nothing means no.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `logging`: tracing subscriber on stderr
//! - `render`: Output formatting (lists, details, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Light and dark palettes

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
