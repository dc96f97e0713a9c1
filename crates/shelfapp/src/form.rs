//! # Book Form
//!
//! The form is where user text becomes a [`BookInput`]. It is the only place that
//! validates: record operations trust what they are given.
//!
//! [`BookForm`] has one field per input and [`FormErrors`] mirrors it with one
//! optional message per field, so a client can show each message next to the
//! field it belongs to.
//!
//! Validation trims every field; a field that is empty after trimming is an error.
//! The trimmed values are what get submitted.

use crate::model::{Book, BookInput, BookStatus};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub accession_number: String,
    pub title: String,
    pub publisher_name: String,
    pub authors: String,
    pub location_name: String,
    pub status: BookStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    pub accession_number: Option<String>,
    pub title: Option<String>,
    pub publisher_name: Option<String>,
    pub authors: Option<String>,
    pub location_name: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }

    /// All messages, in form order.
    pub fn messages(&self) -> Vec<&str> {
        [
            &self.accession_number,
            &self.title,
            &self.publisher_name,
            &self.authors,
            &self.location_name,
        ]
        .into_iter()
        .filter_map(|m| m.as_deref())
        .collect()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

fn required(value: &str, message: &str) -> (String, Option<String>) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        (String::new(), Some(message.to_string()))
    } else {
        (trimmed.to_string(), None)
    }
}

impl BookForm {
    /// A blank form for adding a book.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled from an existing book, for editing.
    pub fn from_book(book: &Book) -> Self {
        Self {
            accession_number: book.accession_number.clone(),
            title: book.title.clone(),
            publisher_name: book.publisher_name.clone(),
            authors: book.authors.clone(),
            location_name: book.location_name.clone(),
            status: book.status,
        }
    }

    pub fn validate(&self) -> Result<BookInput, FormErrors> {
        let (accession_number, accession_err) =
            required(&self.accession_number, "Accession number is required");
        let (title, title_err) = required(&self.title, "Title is required");
        let (publisher_name, publisher_err) =
            required(&self.publisher_name, "Publisher name is required");
        let (authors, authors_err) = required(&self.authors, "Authors are required");
        let (location_name, location_err) =
            required(&self.location_name, "Location name is required");

        let errors = FormErrors {
            accession_number: accession_err,
            title: title_err,
            publisher_name: publisher_err,
            authors: authors_err,
            location_name: location_err,
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(BookInput {
            accession_number,
            title,
            publisher_name,
            authors,
            location_name,
            status: self.status,
        })
    }
}
