//! # Shelf CLI
//!
//! The binary is thin: the CLI lives in `src/cli/`, and this file only invokes
//! `cli::run()` and turns an error into a message and an exit code.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/shelf/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering with console styles (render.rs)       │
//! │  - tracing subscriber setup (logging.rs)                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  shelfapp::api::LibraryApi                                  │
//! │  - Owns the catalog, the theme flag and the view state      │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything in `shelfapp` is UI agnostic. Prompts, colors, widths and exit
//! codes are decided here.
//!
//! ## Testing Approach
//!
//! - Business logic is tested in `shelfapp`.
//! - Rendering helpers have unit tests in `render.rs`.
//! - `tests/cli_e2e.rs` drives the real binary with `assert_cmd`, pointing
//!   `SHELF_DATA` at a temporary directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
