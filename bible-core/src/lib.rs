//! Korean Bible text scraped from the Korean Bible Society reading pages.

pub mod books;
pub mod compare;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod format;
pub mod resolve;
pub mod search;

use serde::Serialize;

pub use books::{BookEntry, Testament, TranslationEntry, BOOKS, DEFAULT_VERSION, TRANSLATIONS};
pub use compare::{compare, Comparison, Outcome};
pub use error::{BibleError, Result};
pub use extract::extract_verses;
pub use fetch::{ChapterFetcher, HttpSource, PageSource};
pub use resolve::{resolve, resolve_code};
pub use search::search;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub number: u32,
    pub text: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub book: String,
    pub book_korean: String,
    pub chapter: u32,
    pub version: String,
    pub version_name: String,
    pub verses: Vec<Verse>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}
