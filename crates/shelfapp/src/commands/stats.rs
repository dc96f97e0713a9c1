use super::{BookCell, CmdResult};
use crate::error::Result;
use crate::records::summarize;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(books: &BookCell<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_summary(summarize(books.get())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::{BookStatus, Summary};
    use crate::test_utils::fixtures::{empty_cell, input};

    #[test]
    fn counts_whole_collection() {
        let mut books = empty_cell();
        add::run(&mut books, input("1", "A", "P", BookStatus::Available)).unwrap();
        add::run(&mut books, input("2", "B", "P", BookStatus::Issued)).unwrap();
        add::run(&mut books, input("3", "C", "P", BookStatus::Issued)).unwrap();

        let summary = run(&books).unwrap().summary.unwrap();
        assert_eq!(
            summary,
            Summary {
                total: 3,
                available: 1,
                issued: 2
            }
        );
    }
}
