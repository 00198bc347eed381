pub mod books;
pub mod read;
pub mod search;

use bible_core::{BibleError, BookEntry};

pub(crate) fn resolve_or_bail(book: &str) -> anyhow::Result<&'static BookEntry> {
    bible_core::resolve(book).ok_or_else(|| BibleError::BookNotFound(book.to_string()).into())
}
