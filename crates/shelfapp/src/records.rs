//! # Record Operations
//!
//! Pure transforms over [`Book`] values. Nothing in here touches storage, logs,
//! or holds on to the collection it was given: callers pass records in and adopt
//! whatever comes back.
//!
//! - [`create_record`]: builds a new book with a fresh id and matching timestamps.
//! - [`update_record`]: returns a copy with the editable fields replaced.
//! - [`filter_records`]: the search box and status dropdown, as one function.
//! - [`summarize`]: dashboard counts.
//!
//! ## Filtering Rules
//!
//! A book is kept when BOTH hold:
//!
//! 1. `status_filter` is empty, or equals the status name exactly
//!    (`"Available"` / `"Issued"`, no case folding).
//! 2. `search_term` is empty, or is a case-insensitive substring of the title,
//!    authors, publisher name or accession number. The location is not searched.
//!
//! Order is preserved, so filtering twice with the same arguments is a no-op.

use crate::model::{Book, BookInput, BookStatus, Summary};
use chrono::Utc;
use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Generates an opaque book id: a base-36 millisecond timestamp followed by a
/// base-36 random suffix.
///
/// Ids sort roughly by creation time but are not guaranteed unique; with 64
/// random bits per id the collision probability is negligible for a single
/// local catalog.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let (hi, lo) = Uuid::new_v4().as_u64_pair();
    format!("{}{}", to_base36(millis), to_base36(hi ^ lo))
}

pub fn create_record(input: BookInput) -> Book {
    let now = Utc::now();
    Book {
        id: generate_id(),
        accession_number: input.accession_number,
        title: input.title,
        publisher_name: input.publisher_name,
        authors: input.authors,
        location_name: input.location_name,
        status: input.status,
        created_at: now,
        updated_at: now,
    }
}

/// Returns `existing` with every editable field taken from `input`.
///
/// `id` and `created_at` are carried over. `updated_at` is the current time,
/// clamped so a clock step backwards can never make it earlier than the
/// previous value.
pub fn update_record(existing: &Book, input: BookInput) -> Book {
    let updated_at = Utc::now().max(existing.updated_at);
    Book {
        id: existing.id.clone(),
        accession_number: input.accession_number,
        title: input.title,
        publisher_name: input.publisher_name,
        authors: input.authors,
        location_name: input.location_name,
        status: input.status,
        created_at: existing.created_at,
        updated_at,
    }
}

/// Single-record predicate behind [`filter_records`].
pub fn book_matches(book: &Book, search_term: &str, status_filter: &str) -> bool {
    let matches_status = status_filter.is_empty() || book.status.as_str() == status_filter;
    if !matches_status {
        return false;
    }
    if search_term.is_empty() {
        return true;
    }

    let term = search_term.to_lowercase();
    [
        &book.title,
        &book.authors,
        &book.publisher_name,
        &book.accession_number,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

pub fn filter_records(records: &[Book], search_term: &str, status_filter: &str) -> Vec<Book> {
    records
        .iter()
        .filter(|book| book_matches(book, search_term, status_filter))
        .cloned()
        .collect()
}

pub fn summarize(records: &[Book]) -> Summary {
    let available = records
        .iter()
        .filter(|b| b.status == BookStatus::Available)
        .count();
    let issued = records
        .iter()
        .filter(|b| b.status == BookStatus::Issued)
        .count();
    Summary {
        total: records.len(),
        available,
        issued,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::collections::HashSet;

    fn input(accession: &str, title: &str, publisher: &str, status: BookStatus) -> BookInput {
        BookInput {
            accession_number: accession.into(),
            title: title.into(),
            publisher_name: publisher.into(),
            authors: "Someone".into(),
            location_name: "Shelf 1".into(),
            status,
        }
    }

    fn dune() -> BookInput {
        BookInput {
            accession_number: "A001".into(),
            title: "Dune".into(),
            publisher_name: "Ace".into(),
            authors: "Frank Herbert".into(),
            location_name: "Shelf 3".into(),
            status: BookStatus::Available,
        }
    }

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u64::MAX), "3w5e11264sgsf");
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let id = create_record(dune()).id;
            assert!(!id.is_empty());
            assert!(seen.insert(id), "duplicate id generated");
        }
    }

    #[test]
    fn generated_ids_are_lowercase_alphanumeric() {
        let id = generate_id();
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn create_stamps_matching_timestamps() {
        let book = create_record(dune());
        assert_eq!(book.created_at, book.updated_at);
    }

    #[test]
    fn create_copies_input_verbatim() {
        let book = create_record(dune());
        assert!(!book.id.is_empty());
        assert_eq!(book.accession_number, "A001");
        assert_eq!(book.title, "Dune");
        assert_eq!(book.publisher_name, "Ace");
        assert_eq!(book.authors, "Frank Herbert");
        assert_eq!(book.location_name, "Shelf 3");
        assert_eq!(book.status, BookStatus::Available);
    }

    #[test]
    fn update_preserves_identity_and_creation_time() {
        let original = create_record(dune());
        let mut change = dune();
        change.status = BookStatus::Issued;

        let updated = update_record(&original, change);

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.status, BookStatus::Issued);
        assert!(updated.updated_at >= original.updated_at);
        // the prior value is untouched
        assert_eq!(original.status, BookStatus::Available);
    }

    #[test]
    fn update_replaces_every_editable_field() {
        let original = create_record(dune());
        let updated = update_record(
            &original,
            BookInput {
                accession_number: "A002".into(),
                title: "Dune Messiah".into(),
                publisher_name: "Putnam".into(),
                authors: "F. Herbert".into(),
                location_name: "Shelf 4".into(),
                status: BookStatus::Issued,
            },
        );
        assert_eq!(updated.accession_number, "A002");
        assert_eq!(updated.title, "Dune Messiah");
        assert_eq!(updated.publisher_name, "Putnam");
        assert_eq!(updated.authors, "F. Herbert");
        assert_eq!(updated.location_name, "Shelf 4");
    }

    #[test]
    fn update_never_moves_updated_at_backwards() {
        let mut original = create_record(dune());
        original.updated_at = Utc::now() + Duration::hours(1);
        let updated = update_record(&original, dune());
        assert_eq!(updated.updated_at, original.updated_at);
        assert!(updated.created_at <= updated.updated_at);
    }

    #[test]
    fn empty_filters_are_identity() {
        let books = vec![
            create_record(input("1", "Dune", "Ace", BookStatus::Available)),
            create_record(input("2", "Emma", "Penguin", BookStatus::Issued)),
            create_record(input("3", "Ulysses", "Bodley", BookStatus::Available)),
        ];
        assert_eq!(filter_records(&books, "", ""), books);
    }

    #[test]
    fn filtering_is_idempotent() {
        let books = vec![
            create_record(input("1", "Dune", "Ace", BookStatus::Available)),
            create_record(input("2", "Dune Messiah", "Ace", BookStatus::Issued)),
            create_record(input("3", "Emma", "Penguin", BookStatus::Available)),
        ];
        let once = filter_records(&books, "dune", "Available");
        let twice = filter_records(&once, "dune", "Available");
        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
    }

    #[test]
    fn search_is_case_insensitive() {
        let books = vec![create_record(dune())];
        assert_eq!(filter_records(&books, "dune", "").len(), 1);
        assert_eq!(filter_records(&books, "DUNE", "").len(), 1);
        assert_eq!(filter_records(&books, "herBERT", "").len(), 1);
    }

    #[test]
    fn search_covers_title_authors_publisher_and_accession() {
        let books = vec![create_record(dune())];
        assert_eq!(filter_records(&books, "Frank", "").len(), 1);
        assert_eq!(filter_records(&books, "ace", "").len(), 1);
        assert_eq!(filter_records(&books, "a00", "").len(), 1);
        // location is not a search field
        assert!(filter_records(&books, "Shelf", "").is_empty());
    }

    #[test]
    fn status_filter_is_exact_and_keeps_order() {
        let books = vec![
            create_record(input("1", "One", "P", BookStatus::Issued)),
            create_record(input("2", "Two", "P", BookStatus::Available)),
            create_record(input("3", "Three", "P", BookStatus::Issued)),
        ];
        let issued = filter_records(&books, "", "Issued");
        let titles: Vec<_> = issued.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Three"]);

        // status names are not case folded
        assert!(filter_records(&books, "", "issued").is_empty());
    }

    #[test]
    fn search_and_status_combine() {
        let issued_ace = create_record(input("1", "Dune", "Ace", BookStatus::Issued));
        let available_ace = create_record(input("2", "Neuromancer", "Ace", BookStatus::Available));
        let books = vec![issued_ace, available_ace.clone()];

        let result = filter_records(&books, "ace", "Available");
        assert_eq!(result, vec![available_ace]);
    }

    #[test]
    fn summary_counts_by_status() {
        let books = vec![
            create_record(input("1", "One", "P", BookStatus::Issued)),
            create_record(input("2", "Two", "P", BookStatus::Available)),
            create_record(input("3", "Three", "P", BookStatus::Available)),
        ];
        assert_eq!(
            summarize(&books),
            Summary {
                total: 3,
                available: 2,
                issued: 1
            }
        );
        assert_eq!(summarize(&[]), Summary::default());
    }
}
