use crate::books::{translation_codes, translation_name};
use crate::fetch::{ChapterFetcher, PageSource};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum Outcome {
    Found(String),
    /// the chapter came back without this verse
    Missing,
    /// the fetch failed
    Unavailable,
}

#[derive(Clone, Debug, Serialize)]
pub struct Comparison {
    pub version: String,
    pub name: String,
    pub outcome: Outcome,
}

/// One verse across several versions (all known versions when `versions`
/// is `None`). Fetches run in order; a failing version does not stop the rest.
pub fn compare<S: PageSource>(
    fetcher: &ChapterFetcher<S>,
    book_code: &str,
    chapter: u32,
    verse: u32,
    versions: Option<&[String]>,
) -> Vec<Comparison> {
    let codes: Vec<String> = match versions {
        Some(v) => v.to_vec(),
        None => translation_codes().into_iter().map(String::from).collect(),
    };
    codes
        .into_iter()
        .map(|code| {
            let outcome = match fetcher.fetch(book_code, chapter, &code) {
                Ok(ch) => ch
                    .verses
                    .into_iter()
                    .find(|v| v.number == verse)
                    .map(|v| Outcome::Found(v.text))
                    .unwrap_or(Outcome::Missing),
                Err(_) => Outcome::Unavailable,
            };
            Comparison { name: translation_name(&code).to_string(), version: code, outcome }
        })
        .collect()
}
