//! # API Facade: the Application Shell
//!
//! [`LibraryApi`] is the single entry point for every shelf operation, whatever UI
//! sits on top of it. It owns:
//!
//! - the **canonical collection**, in a [`PersistentCell`] keyed `books_key`,
//! - the **theme flag**, in a second cell keyed `theme_key`,
//! - the **transient view state** ([`ViewState`]): which form is open, which book
//!   is being edited, the search term and the status filter.
//!
//! Both cells share one store through an `Rc`. Neither knows about the other;
//! there is no transaction spanning them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (user selectors → books, forms → validated inputs)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not print, prompt or format. Business logic lives in
//! [`crate::commands`]; the pure transforms in [`crate::records`].
//!
//! ## The Form Flow
//!
//! Mirrors what a user does on screen:
//!
//! 1. [`LibraryApi::open_add_form`] or [`LibraryApi::open_edit_form`] opens the form
//!    (the latter pre-filled, with the book recorded as the edit target).
//! 2. The client changes fields on the returned [`BookForm`].
//! 3. [`LibraryApi::submit_form`] validates. Errors come back as
//!    [`ShelfError::Validation`] and the form stays open. Otherwise the book is
//!    created, or the edit target updated, and the form closes.
//!
//! [`LibraryApi::add_book`] and [`LibraryApi::edit_book`] skip the form for callers
//! that already hold a validated [`BookInput`].
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `LibraryApi<FsBackend>`
//! - Testing: `LibraryApi<MemBackend>`

use crate::cell::{LoadState, PersistentCell};
use crate::commands::theme::{ThemeAction, ThemeCell};
use crate::commands::{self, BookCell, CmdMessage, CmdResult};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::form::BookForm;
use crate::index::{parse_selectors, resolve_selector, BookSelector};
use crate::model::{Book, BookInput, BookStatus, Summary};
use crate::records::summarize;
use crate::store::KeyValueStore;
use std::rc::Rc;
use tracing::debug;

/// Which form, if any, the user has open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Adding,
    Editing {
        id: String,
    },
}

/// Transient UI state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub form: FormState,
    pub search_term: String,
    /// Empty, or an exact status name (`"Available"` / `"Issued"`).
    pub status_filter: String,
}

impl ViewState {
    pub fn is_form_open(&self) -> bool {
        self.form != FormState::Closed
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.form {
            FormState::Editing { id } => Some(id),
            _ => None,
        }
    }
}

pub struct LibraryApi<S: KeyValueStore> {
    books: BookCell<Rc<S>>,
    theme: ThemeCell<Rc<S>>,
    view: ViewState,
}

impl<S: KeyValueStore> LibraryApi<S> {
    pub fn new(store: S, config: &ShelfConfig) -> Self {
        Self::with_shared_store(Rc::new(store), config)
    }

    pub fn with_shared_store(store: Rc<S>, config: &ShelfConfig) -> Self {
        let books = PersistentCell::new(store.clone(), config.books_key.as_str(), Vec::new())
            .with_pretty(config.pretty_json);
        let theme = PersistentCell::new(store, config.theme_key.as_str(), false)
            .with_pretty(config.pretty_json);
        debug!(
            books = books.get().len(),
            dark = *theme.get(),
            "Library state loaded"
        );
        Self {
            books,
            theme,
            view: ViewState::default(),
        }
    }

    /// The full collection, most recent first.
    pub fn books(&self) -> &[Book] {
        self.books.get()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Warnings about how the persisted state was loaded.
    pub fn startup_messages(&self) -> Vec<CmdMessage> {
        let mut messages = Vec::new();
        if self.books.load_state() == LoadState::Recovered {
            messages.push(CmdMessage::warning(
                "Saved catalog could not be read; starting from an empty catalog",
            ));
        }
        if self.theme.load_state() == LoadState::Recovered {
            messages.push(CmdMessage::warning(
                "Saved theme could not be read; using the light theme",
            ));
        }
        messages
    }

    // --- Records ---

    pub fn add_book(&mut self, input: BookInput) -> Result<CmdResult> {
        commands::add::run(&mut self.books, input)
    }

    pub fn edit_book(&mut self, selector: &BookSelector, input: BookInput) -> Result<CmdResult> {
        commands::edit::run(&mut self.books, selector, input)
    }

    pub fn delete_books<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        let result = commands::delete::run(&mut self.books, &selectors)?;

        // Deleting the book under edit closes its form
        if let Some(id) = self.view.editing_id() {
            if result.affected_books.iter().any(|d| d.book.id == id) {
                self.view.form = FormState::Closed;
            }
        }
        Ok(result)
    }

    pub fn view_books<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.books, &selectors)
    }

    /// The filtered view for the current search term and status filter.
    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(
            &self.books,
            &self.view.search_term,
            &self.view.status_filter,
        )
    }

    pub fn summary(&self) -> Summary {
        summarize(self.books.get())
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.books)
    }

    // --- View state ---

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.search_term = term.into();
    }

    pub fn set_status_filter(&mut self, status: Option<BookStatus>) {
        self.view.status_filter = status.map(|s| s.as_str().to_string()).unwrap_or_default();
    }

    // --- Form flow ---

    pub fn open_add_form(&mut self) -> BookForm {
        self.view.form = FormState::Adding;
        BookForm::new()
    }

    pub fn open_edit_form(&mut self, selector: &str) -> Result<BookForm> {
        let selector: BookSelector = selector.parse()?;
        let target = resolve_selector(self.books.get(), &selector)?;
        self.view.form = FormState::Editing {
            id: target.book.id.clone(),
        };
        Ok(BookForm::from_book(&target.book))
    }

    pub fn close_form(&mut self) {
        self.view.form = FormState::Closed;
    }

    pub fn submit_form(&mut self, form: &BookForm) -> Result<CmdResult> {
        if !self.view.is_form_open() {
            return Err(ShelfError::Api("No form is open".to_string()));
        }
        let input = form.validate().map_err(ShelfError::Validation)?;

        let result = match &self.view.form {
            FormState::Editing { id } => {
                let selector = BookSelector::Id(id.clone());
                commands::edit::run(&mut self.books, &selector, input)?
            }
            _ => commands::add::run(&mut self.books, input)?,
        };
        self.close_form();
        Ok(result)
    }

    // --- Theme ---

    pub fn is_dark(&self) -> bool {
        *self.theme.get()
    }

    pub fn theme(&mut self, action: ThemeAction) -> Result<CmdResult> {
        commands::theme::run(&mut self.theme, action)
    }

    pub fn toggle_theme(&mut self) -> Result<CmdResult> {
        self.theme(ThemeAction::Toggle)
    }

    pub fn set_dark(&mut self, dark: bool) -> Result<CmdResult> {
        self.theme(if dark {
            ThemeAction::Dark
        } else {
            ThemeAction::Light
        })
    }

    /// Retry any write-through that failed earlier in this session.
    pub fn flush(&mut self) -> Result<()> {
        if self.books.is_dirty() {
            self.books.flush()?;
        }
        if self.theme.is_dirty() {
            self.theme.flush()?;
        }
        Ok(())
    }
}
