//! # Command Layer
//!
//! This module contains the **core business logic** of shelf. Each command lives in
//! its own submodule and is a plain function over the collection cell.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Call the pure record operations in [`crate::records`]
//! - Hand the resulting collection to the cell, which writes it through
//! - Return a structured [`CmdResult`] with affected books and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or formatting
//! - **Validation**: inputs arrive as [`crate::model::BookInput`], already checked
//! - **Confirmation**: `delete` removes what it is told to remove
//!
//! ## Persistence Warnings
//!
//! A failed write-through is not an error for the command: the change stands for
//! this session. Commands that mutate append a warning message instead (see
//! [`persistence_warning`]) so the client can tell the user.
//!
//! ## Command Modules
//!
//! - [`add`]: Create a book and prepend it
//! - [`edit`]: Replace a book's editable fields
//! - [`delete`]: Remove books
//! - [`list`]: Filtered view with canonical positions
//! - [`view`]: Selected books
//! - [`stats`]: Dashboard counts
//! - [`theme`]: Light/dark preference

use crate::cell::PersistentCell;
use crate::index::DisplayBook;
use crate::model::{Book, Summary};
use crate::store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod stats;
pub mod theme;
pub mod view;

/// The collection cell every command works on.
pub type BookCell<S> = PersistentCell<Vec<Book>, S>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_books: Vec<DisplayBook>,
    pub listed_books: Vec<DisplayBook>,
    pub messages: Vec<CmdMessage>,
    pub summary: Option<Summary>,
    pub dark_mode: Option<bool>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }
}

/// Warning to show when the cell could not write its latest value.
pub fn persistence_warning<T, S>(cell: &PersistentCell<T, S>) -> Option<CmdMessage>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    if !cell.is_dirty() {
        return None;
    }
    let reason = cell
        .last_write_error()
        .map(|e| e.to_string())
        .unwrap_or_else(|| "unknown error".to_string());
    Some(CmdMessage::warning(format!(
        "Change kept for this session but not saved: {}",
        reason
    )))
}
