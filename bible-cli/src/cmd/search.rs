use bible_core::format::format_search;
use bible_core::{ChapterFetcher, PageSource};
use std::io::Write;

pub fn search<S: PageSource>(
    fetcher: &ChapterFetcher<S>,
    out: &mut impl Write,
    query: &str,
    books: &[String],
    translation: &str,
    json: bool,
) -> anyhow::Result<()> {
    let subset: Vec<&str> = books.iter().map(|s| s.as_str()).collect();
    let subset = (!subset.is_empty()).then_some(subset.as_slice());
    let hits = bible_core::search(fetcher, query, translation, subset);
    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({"count": hits.len(), "results": hits}))?
        )?;
    } else {
        writeln!(out, "{}", format_search(query, &hits))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::fixture::{fetcher, output};

    #[test]
    fn empty_result_message() {
        let f = fetcher(None);
        let mut buf = Vec::new();
        search(&f, &mut buf, "없는말", &[], "GAE", false).unwrap();
        assert_eq!(output(buf), "No results found for \"없는말\" (searched limited books for demo)\n");
        assert_eq!(f.source().calls.borrow().len(), 6);
    }

    #[test]
    fn json_hits_from_first_two_books() {
        let f = fetcher(Some("book=mrk&chap=2"));
        let mut buf = Vec::new();
        let books = vec!["Mark".to_string(), "Luke".to_string(), "John".to_string()];
        search(&f, &mut buf, "말씀 5", &books, "GAE", true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
        // mrk 1 (mrk 2 fails and ends Mark), luk 1..3
        assert_eq!(v["count"], 4);
        assert_eq!(v["results"][0]["book"], "Mark");
        assert_eq!(v["results"][1]["book"], "Luke");
        assert!(f.source().calls.borrow().iter().all(|u| !u.contains("book=jhn")));
    }
}
