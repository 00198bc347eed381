use crate::Verse;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::OnceLock;

fn verse_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)^([0-9]+)\s+(.+)$").unwrap())
}

fn footnote_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+\)").unwrap())
}

/// Parse one span's text as `"<n> <text>"`. Footnote markers (`1)`, `23)`)
/// are dropped anywhere in the text and only the first line is kept.
pub fn parse_verse_text(raw: &str) -> Option<Verse> {
    let caps = verse_re().captures(raw.trim())?;
    let number = caps[1].parse::<u32>().ok().filter(|n| *n > 0)?;
    let stripped = footnote_re().replace_all(&caps[2], "");
    let text = stripped.trim().split('\n').next().unwrap_or("").trim();
    if text.is_empty() {
        return None;
    }
    Some(Verse { number, text: text.to_string() })
}

/// Pull verses out of a reading page.
///
/// Every `span` is a candidate, in document order (nested spans included),
/// since the page repeats a verse across several spans with uneven markup.
/// The first candidate for a verse number wins.
pub fn extract_verses(html: &str) -> Vec<Verse> {
    let doc = Html::parse_document(html);
    let Ok(sel) = Selector::parse("span") else { return Vec::new() };
    let mut seen: HashSet<u32> = HashSet::new();
    let mut out: Vec<Verse> = Vec::new();
    for node in doc.select(&sel) {
        let t = node.text().collect::<String>();
        if let Some(v) = parse_verse_text(&t) {
            if seen.insert(v.number) {
                out.push(v);
            }
        }
    }
    out
}
