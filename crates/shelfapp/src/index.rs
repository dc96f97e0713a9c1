//! # Book Identifiers: Id vs Canonical Position
//!
//! Book ids are opaque strings like `lx3k9a0q7f2m1c8d`: fine for storage, tedious
//! to type. The CLI lets users address books by number instead.
//!
//! ## Canonical Position
//!
//! A book's number is its 1-based position in the **full, unfiltered** collection,
//! which is kept most-recent-first. Filtering never renumbers: if a search shows
//! only books 2 and 5, they are still shown as 2 and 5, so `shelf delete 5` hits
//! the book the user just saw as 5.
//!
//! ## Selectors
//!
//! [`BookSelector`] is what users type:
//! - `3` → [`BookSelector::Index`] (position 3)
//! - anything else → [`BookSelector::Id`] (an exact id)
//!
//! [`resolve_selectors`] maps selectors to ids, deduplicating while preserving order.
//!
//! **Developer Note**: always go through [`index_books`] when presenting books.
//! Never enumerate a filtered list yourself, or the numbers drift.

use crate::error::{Result, ShelfError};
use crate::model::Book;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookSelector {
    Index(usize),
    Id(String),
}

impl fmt::Display for BookSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookSelector::Index(i) => write!(f, "{}", i),
            BookSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for BookSelector {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShelfError::InvalidSelector("empty selector".to_string()));
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse::<usize>() {
                Ok(0) | Err(_) => Err(ShelfError::InvalidSelector(format!(
                    "{} (positions start at 1)",
                    s
                ))),
                Ok(n) => Ok(BookSelector::Index(n)),
            };
        }
        Ok(BookSelector::Id(s.to_string()))
    }
}

/// A book paired with its canonical position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBook {
    pub index: usize,
    pub book: Book,
}

/// Assigns canonical positions to the full collection, in collection order.
pub fn index_books(books: &[Book]) -> Vec<DisplayBook> {
    books
        .iter()
        .enumerate()
        .map(|(i, book)| DisplayBook {
            index: i + 1,
            book: book.clone(),
        })
        .collect()
}

/// Parses user input into selectors.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<BookSelector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

/// Resolves one selector against the full collection.
pub fn resolve_selector(books: &[Book], selector: &BookSelector) -> Result<DisplayBook> {
    let found: Option<(usize, &Book)> = match selector {
        BookSelector::Index(n) => n
            .checked_sub(1)
            .and_then(|i| books.get(i))
            .map(|b| (*n, b)),
        BookSelector::Id(id) => books
            .iter()
            .enumerate()
            .find(|(_, b)| &b.id == id)
            .map(|(i, b)| (i + 1, b)),
    };
    found
        .map(|(index, book)| DisplayBook {
            index,
            book: book.clone(),
        })
        .ok_or_else(|| ShelfError::BookNotFound(selector.to_string()))
}

/// Resolves selectors in order, skipping repeats of the same book.
pub fn resolve_selectors(books: &[Book], selectors: &[BookSelector]) -> Result<Vec<DisplayBook>> {
    let mut resolved: Vec<DisplayBook> = Vec::new();
    for selector in selectors {
        let dp = resolve_selector(books, selector)?;
        if !resolved.iter().any(|r| r.book.id == dp.book.id) {
            resolved.push(dp);
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookInput, BookStatus};
    use crate::records::create_record;

    fn books(titles: &[&str]) -> Vec<Book> {
        titles
            .iter()
            .map(|t| {
                create_record(BookInput {
                    accession_number: format!("ACC-{}", t),
                    title: t.to_string(),
                    publisher_name: "P".into(),
                    authors: "A".into(),
                    location_name: "L".into(),
                    status: BookStatus::Available,
                })
            })
            .collect()
    }

    #[test]
    fn parses_positions_and_ids() {
        assert_eq!("3".parse::<BookSelector>().unwrap(), BookSelector::Index(3));
        assert_eq!(
            " lx3k9a ".parse::<BookSelector>().unwrap(),
            BookSelector::Id("lx3k9a".into())
        );
    }

    #[test]
    fn rejects_zero_and_empty() {
        assert!("0".parse::<BookSelector>().is_err());
        assert!("".parse::<BookSelector>().is_err());
        assert!("   ".parse::<BookSelector>().is_err());
    }

    #[test]
    fn indexes_in_collection_order() {
        let list = books(&["C", "B", "A"]);
        let indexed = index_books(&list);
        let pairs: Vec<_> = indexed
            .iter()
            .map(|d| (d.index, d.book.title.as_str()))
            .collect();
        assert_eq!(pairs, vec![(1, "C"), (2, "B"), (3, "A")]);
    }

    #[test]
    fn resolves_by_position_and_id() {
        let list = books(&["C", "B", "A"]);
        let by_pos = resolve_selector(&list, &BookSelector::Index(2)).unwrap();
        assert_eq!(by_pos.book.title, "B");

        let by_id = resolve_selector(&list, &BookSelector::Id(list[2].id.clone())).unwrap();
        assert_eq!(by_id.index, 3);
    }

    #[test]
    fn unknown_selector_is_not_found() {
        let list = books(&["A"]);
        assert!(matches!(
            resolve_selector(&list, &BookSelector::Index(2)),
            Err(ShelfError::BookNotFound(_))
        ));
        assert!(matches!(
            resolve_selector(&list, &BookSelector::Id("nope".into())),
            Err(ShelfError::BookNotFound(_))
        ));
    }

    #[test]
    fn resolve_deduplicates_preserving_order() {
        let list = books(&["C", "B", "A"]);
        let selectors = vec![
            BookSelector::Index(3),
            BookSelector::Id(list[2].id.clone()),
            BookSelector::Index(1),
        ];
        let resolved = resolve_selectors(&list, &selectors).unwrap();
        let idx: Vec<_> = resolved.iter().map(|d| d.index).collect();
        assert_eq!(idx, vec![3, 1]);
    }

    #[test]
    fn parse_selectors_fails_on_any_bad_input() {
        assert!(parse_selectors(&["1", "0"]).is_err());
        assert_eq!(parse_selectors(&["1", "2"]).unwrap().len(), 2);
    }
}
