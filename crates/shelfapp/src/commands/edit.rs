use super::{persistence_warning, BookCell, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_selector, BookSelector, DisplayBook};
use crate::model::BookInput;
use crate::records::update_record;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(
    books: &mut BookCell<S>,
    selector: &BookSelector,
    input: BookInput,
) -> Result<CmdResult> {
    let target = resolve_selector(books.get(), selector)?;
    let updated = update_record(&target.book, input);

    let replacement = updated.clone();
    books.update(|prev| {
        prev.iter()
            .map(|b| {
                if b.id == replacement.id {
                    replacement.clone()
                } else {
                    b.clone()
                }
            })
            .collect()
    });

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book updated ({}): {}",
        target.index, updated.title
    )));
    // Position doesn't change on update
    result.affected_books.push(DisplayBook {
        index: target.index,
        book: updated,
    });
    if let Some(warning) = persistence_warning(books) {
        result.add_message(warning);
    }
    Ok(result)
}
