use super::{BookCell, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_books;
use crate::records::{book_matches, summarize};
use crate::store::KeyValueStore;

/// Lists the books passing the search term and status filter.
///
/// Listed books keep their canonical position in the full collection, and the
/// summary always counts the full collection.
pub fn run<S: KeyValueStore>(
    books: &BookCell<S>,
    search_term: &str,
    status_filter: &str,
) -> Result<CmdResult> {
    let all = books.get();
    let listed: Vec<_> = index_books(all)
        .into_iter()
        .filter(|d| book_matches(&d.book, search_term, status_filter))
        .collect();

    let mut result = CmdResult::default()
        .with_listed_books(listed)
        .with_summary(summarize(all));

    if result.listed_books.is_empty() {
        if all.is_empty() {
            result.add_message(CmdMessage::info(
                "No books yet. Start building your library by adding your first book.",
            ));
        } else {
            result.add_message(CmdMessage::info(
                "No books found. Try adjusting your search or filter criteria.",
            ));
        }
    }
    Ok(result)
}
