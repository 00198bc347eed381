//! Markdown-ish text shared by the MCP tools and the CLI.

use crate::books::{books_in, Testament};
use crate::compare::{Comparison, Outcome};
use crate::{Chapter, SearchHit, Verse};
use std::fmt::Write;

fn push_verses<'a>(out: &mut String, verses: impl Iterator<Item = &'a Verse>) {
    for v in verses {
        let _ = write!(out, "**{}.** {}\n\n", v.number, v.text);
    }
}

pub fn format_chapter(ch: &Chapter) -> String {
    let mut out = format!("# {} ({}) {}\n", ch.book, ch.book_korean, ch.chapter);
    let _ = write!(out, "**Translation:** {}\n\n", ch.version_name);
    push_verses(&mut out, ch.verses.iter());
    out
}

/// End of a verse range; a missing or zero end means a single verse.
pub fn range_end(start: u32, end: Option<u32>) -> u32 {
    end.filter(|e| *e != 0).unwrap_or(start)
}

pub fn select_verses(ch: &Chapter, start: u32, end: Option<u32>) -> Vec<&Verse> {
    let end = range_end(start, end);
    ch.verses.iter().filter(|v| v.number >= start && v.number <= end).collect()
}

pub fn format_verses(ch: &Chapter, start: u32, end: Option<u32>) -> String {
    let last = range_end(start, end);
    let mut out = format!("# {} {}:{}", ch.book, ch.chapter, start);
    if last != start {
        let _ = write!(out, "-{}", last);
    }
    let _ = write!(out, "\n**Translation:** {}\n\n", ch.version_name);
    push_verses(&mut out, select_verses(ch, start, end).into_iter());
    out
}

pub fn format_search(query: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("No results found for \"{}\" (searched limited books for demo)", query);
    }
    let mut out = format!("# Search Results for \"{}\"\n", query);
    let _ = write!(out, "Found {} verses:\n\n", hits.len());
    for h in hits {
        let _ = write!(out, "**{} {}:{}**\n{}\n\n", h.book, h.chapter, h.verse, h.text);
    }
    out
}

/// Both testament headings are always printed; the filter only drops entries.
pub fn format_books(filter: Option<Testament>) -> String {
    let mut out = String::from("# Bible Books\n\n");
    for (i, t) in [Testament::OT, Testament::NT].into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "## {}", t.heading());
        for b in books_in(filter).filter(|b| b.testament == t) {
            let _ = writeln!(out, "- **{}** ({}) - code: `{}`", b.english, b.korean, b.code);
        }
    }
    out
}

pub fn format_comparison(book: &str, chapter: u32, verse: u32, rows: &[Comparison]) -> String {
    let mut out = format!("# {} {}:{} - Translation Comparison\n\n", book, chapter, verse);
    for r in rows {
        match &r.outcome {
            Outcome::Found(text) => {
                let _ = write!(out, "## {}\n{}\n\n", r.name, text);
            }
            Outcome::Unavailable => {
                let _ = write!(out, "## {}\n(Error loading this version)\n\n", r.name);
            }
            Outcome::Missing => {}
        }
    }
    out
}

pub fn book_not_found(book: &str, with_hint: bool) -> String {
    if with_hint {
        format!("Error: Book '{}' not found. Use list-books to see available books.", book)
    } else {
        format!("Error: Book '{}' not found.", book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(n: u32) -> Chapter {
        Chapter {
            book: "Genesis".into(),
            book_korean: "창세기".into(),
            chapter: 1,
            version: "GAE".into(),
            version_name: "개역개정 (Revised Korean)".into(),
            verses: (1..=n).map(|i| Verse { number: i, text: format!("v{}", i) }).collect(),
        }
    }

    #[test]
    fn chapter_text() {
        let s = format_chapter(&chapter(2));
        assert_eq!(
            s,
            "# Genesis (창세기) 1\n**Translation:** 개역개정 (Revised Korean)\n\n**1.** v1\n\n**2.** v2\n\n"
        );
    }

    #[test]
    fn verse_range() {
        let ch = chapter(31);
        let s = format_verses(&ch, 1, Some(2));
        assert_eq!(s, "# Genesis 1:1-2\n**Translation:** 개역개정 (Revised Korean)\n\n**1.** v1\n\n**2.** v2\n\n");
        let nums: Vec<u32> = select_verses(&ch, 1, Some(2)).iter().map(|v| v.number).collect();
        assert_eq!(nums, vec![1, 2]);
        assert!(format_verses(&ch, 5, None).starts_with("# Genesis 1:5\n"));
        assert!(format_verses(&ch, 5, Some(0)).starts_with("# Genesis 1:5\n"));
        assert_eq!(select_verses(&ch, 40, None).len(), 0);
    }

    #[test]
    fn search_text() {
        assert_eq!(format_search("빛", &[]), "No results found for \"빛\" (searched limited books for demo)");
        let hits = vec![SearchHit { book: "Genesis".into(), chapter: 1, verse: 3, text: "빛이 있으라".into() }];
        assert_eq!(format_search("빛", &hits), "# Search Results for \"빛\"\nFound 1 verses:\n\n**Genesis 1:3**\n빛이 있으라\n\n");
    }

    #[test]
    fn books_text() {
        let all = format_books(None);
        assert!(all.starts_with("# Bible Books\n\n## Old Testament\n- **Genesis** (창세기) - code: `gen`\n"));
        assert!(all.contains("\n\n## New Testament\n- **Matthew** (마태복음) - code: `mat`\n"));
        assert_eq!(all.matches("- **").count(), 66);
        let nt = format_books(Some(Testament::NT));
        assert!(nt.contains("## Old Testament\n\n## New Testament\n"));
        assert_eq!(nt.matches("- **").count(), 27);
    }

    #[test]
    fn comparison_text() {
        let rows = vec![
            Comparison { version: "GAE".into(), name: "개역개정".into(), outcome: Outcome::Found("a".into()) },
            Comparison { version: "NIR".into(), name: "새번역".into(), outcome: Outcome::Unavailable },
            Comparison { version: "KOR".into(), name: "공동번역".into(), outcome: Outcome::Missing },
        ];
        let s = format_comparison("창세기", 1, 1, &rows);
        assert_eq!(s, "# 창세기 1:1 - Translation Comparison\n\n## 개역개정\na\n\n## 새번역\n(Error loading this version)\n\n");
    }
}
