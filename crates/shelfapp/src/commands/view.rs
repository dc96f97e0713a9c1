use super::{BookCell, CmdResult};
use crate::error::Result;
use crate::index::{resolve_selectors, BookSelector};
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(books: &BookCell<S>, selectors: &[BookSelector]) -> Result<CmdResult> {
    let resolved = resolve_selectors(books.get(), selectors)?;
    Ok(CmdResult::default().with_listed_books(resolved))
}
