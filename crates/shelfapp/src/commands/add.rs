use super::{persistence_warning, BookCell, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayBook;
use crate::model::BookInput;
use crate::records::create_record;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(books: &mut BookCell<S>, input: BookInput) -> Result<CmdResult> {
    let book = create_record(input);
    let title = book.title.clone();

    let new_book = book.clone();
    books.update(|prev| {
        let mut next = Vec::with_capacity(prev.len() + 1);
        next.push(new_book);
        next.extend(prev.iter().cloned());
        next
    });

    let mut result = CmdResult::default();
    // New books are prepended, so they always sit at position 1
    result.affected_books.push(DisplayBook { index: 1, book });
    result.add_message(CmdMessage::success(format!("Book added: {}", title)));
    if let Some(warning) = persistence_warning(books) {
        result.add_message(warning);
    }
    Ok(result)
}
