use crate::books::BOOKS;
use crate::fetch::{ChapterFetcher, PageSource};
use crate::resolve::resolve;
use crate::SearchHit;

/// Books scanned per search.
pub const SEARCH_BOOK_LIMIT: usize = 2;
/// Chapters scanned per book, starting at 1.
pub const SEARCH_CHAPTER_LIMIT: u32 = 3;

/// Keyword scan over a fixed small window of the text: the first two books
/// of `books` (or of the whole table), chapters 1-3 of each, fetched one at
/// a time. A failed fetch ends that book; the search carries on.
pub fn search<S: PageSource>(
    fetcher: &ChapterFetcher<S>,
    query: &str,
    version: &str,
    books: Option<&[&str]>,
) -> Vec<SearchHit> {
    let all: Vec<&str> = BOOKS.iter().map(|b| b.english).collect();
    let candidates = books.unwrap_or(all.as_slice());
    let needle = query.to_lowercase();
    let mut hits: Vec<SearchHit> = Vec::new();
    for name in candidates.iter().take(SEARCH_BOOK_LIMIT) {
        let Some(book) = resolve(name) else { continue };
        for chapter in 1..=SEARCH_CHAPTER_LIMIT {
            let Ok(ch) = fetcher.fetch(book.code, chapter, version) else { break };
            for v in ch.verses.iter().filter(|v| v.text.to_lowercase().contains(&needle)) {
                hits.push(SearchHit {
                    book: ch.book.clone(),
                    chapter: ch.chapter,
                    verse: v.number,
                    text: v.text.clone(),
                });
            }
        }
    }
    hits
}
