//! # Domain Model: Books and the Catalog Layout
//!
//! This module defines the core data structures for shelf: [`Book`], [`BookInput`]
//! and [`BookStatus`].
//!
//! ## The Record
//!
//! A [`Book`] is one catalog entry. Five free-text fields describe it (accession
//! number, title, publisher, authors, shelf location), a [`BookStatus`] says whether
//! it is on the shelf, and two timestamps track its lifecycle:
//!
//! - `created_at`: stamped once, when the record is created.
//! - `updated_at`: stamped at creation and bumped on every update.
//!
//! `created_at <= updated_at` holds for every record the catalog produces.
//!
//! ## Identity
//!
//! `id` is an opaque string generated at creation (see [`crate::records::generate_id`])
//! and never reassigned. Users rarely type it: the CLI addresses books by their
//! canonical position instead (see [`crate::index`]).
//!
//! ## Persisted Layout
//!
//! The collection is stored as a JSON array. Field names are camelCase so a
//! catalog written by older browser-based versions still loads:
//!
//! ```text
//! [
//!   {
//!     "id": "lx3k9a0q7f2m1c8d",
//!     "accessionNumber": "A001",
//!     "title": "Dune",
//!     "publisherName": "Ace",
//!     "authors": "Frank Herbert",
//!     "locationName": "Shelf 3",
//!     "status": "Available",
//!     "createdAt": "2024-05-01T10:00:00Z",
//!     "updatedAt": "2024-05-01T10:00:00Z"
//!   }
//! ]
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl BookStatus {
    /// The exact name used in persisted data and in status filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Issued => "Issued",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(BookStatus::Available),
            "issued" => Ok(BookStatus::Issued),
            _ => Err(format!("Invalid status: {} (expected Available or Issued)", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub accession_number: String,
    pub title: String,
    pub publisher_name: String,
    pub authors: String,
    pub location_name: String,
    #[serde(default)]
    pub status: BookStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The mutable part of a [`Book`], as submitted by the form layer.
///
/// Values are expected to be trimmed and non-empty already; see
/// [`crate::form::BookForm::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub accession_number: String,
    pub title: String,
    pub publisher_name: String,
    pub authors: String,
    pub location_name: String,
    #[serde(default)]
    pub status: BookStatus,
}

impl Book {
    /// Splits the book back into the fields a form edits.
    pub fn to_input(&self) -> BookInput {
        BookInput {
            accession_number: self.accession_number.clone(),
            title: self.title.clone(),
            publisher_name: self.publisher_name.clone(),
            authors: self.authors.clone(),
            location_name: self.location_name.clone(),
            status: self.status,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }
}

/// Counts shown on the catalog dashboard. Always computed over the full
/// collection, never over a filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub available: usize,
    pub issued: usize,
}
