pub mod fixtures {
    use crate::api::LibraryApi;
    use crate::commands::BookCell;
    use crate::config::ShelfConfig;
    use crate::model::{BookInput, BookStatus};
    use crate::store::mem_backend::MemBackend;

    pub fn empty_cell() -> BookCell<MemBackend> {
        BookCell::new(MemBackend::new(), "library-books", Vec::new())
    }

    pub fn input(accession: &str, title: &str, publisher: &str, status: BookStatus) -> BookInput {
        BookInput {
            accession_number: accession.into(),
            title: title.into(),
            publisher_name: publisher.into(),
            authors: "Someone".into(),
            location_name: "Shelf 1".into(),
            status,
        }
    }

    pub struct LibraryFixture {
        pub api: LibraryApi<MemBackend>,
    }

    impl Default for LibraryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl LibraryFixture {
        pub fn new() -> Self {
            Self {
                api: LibraryApi::new(MemBackend::new(), &ShelfConfig::default()),
            }
        }

        /// Adds books in order, so the last one ends up at position 1.
        pub fn with_books(mut self, books: &[(&str, &str, BookStatus)]) -> Self {
            for (accession, title, status) in books {
                self.api
                    .add_book(input(accession, title, "Ace", *status))
                    .expect("add_book on a memory store");
            }
            self
        }
    }
}
