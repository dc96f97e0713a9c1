use super::{persistence_warning, BookCell, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_selectors, BookSelector};
use crate::store::KeyValueStore;

/// Removes the selected books. Unconditional: confirmation belongs to the client.
pub fn run<S: KeyValueStore>(
    books: &mut BookCell<S>,
    selectors: &[BookSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(books.get(), selectors)?;
    let mut result = CmdResult::default();
    if resolved.is_empty() {
        return Ok(result);
    }

    let doomed: Vec<String> = resolved.iter().map(|d| d.book.id.clone()).collect();
    books.update(|prev| {
        prev.iter()
            .filter(|b| !doomed.contains(&b.id))
            .cloned()
            .collect()
    });

    for display_book in &resolved {
        result.add_message(CmdMessage::success(format!(
            "Book deleted ({}): {}",
            display_book.index, display_book.book.title
        )));
    }
    result.affected_books = resolved;
    if let Some(warning) = persistence_warning(books) {
        result.add_message(warning);
    }
    Ok(result)
}
