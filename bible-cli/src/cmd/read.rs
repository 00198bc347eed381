use super::resolve_or_bail;
use bible_core::format::{format_chapter, format_comparison, format_verses, select_verses};
use bible_core::{compare as compare_versions, Chapter, ChapterFetcher, PageSource, Verse};
use std::io::Write;

pub fn chapter<S: PageSource>(
    fetcher: &ChapterFetcher<S>,
    out: &mut impl Write,
    book: &str,
    chapter: u32,
    translation: &str,
    json: bool,
) -> anyhow::Result<()> {
    let entry = resolve_or_bail(book)?;
    let ch = fetcher.fetch(entry.code, chapter, translation)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&ch)?)?;
    } else {
        write!(out, "{}", format_chapter(&ch))?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn verses<S: PageSource>(
    fetcher: &ChapterFetcher<S>,
    out: &mut impl Write,
    book: &str,
    chapter: u32,
    start: u32,
    end: Option<u32>,
    translation: &str,
    json: bool,
) -> anyhow::Result<()> {
    let entry = resolve_or_bail(book)?;
    let ch = fetcher.fetch(entry.code, chapter, translation)?;
    if json {
        let picked: Vec<Verse> = select_verses(&ch, start, end).into_iter().cloned().collect();
        let ch = Chapter { verses: picked, ..ch };
        writeln!(out, "{}", serde_json::to_string_pretty(&ch)?)?;
    } else {
        write!(out, "{}", format_verses(&ch, start, end))?;
    }
    Ok(())
}

pub fn compare<S: PageSource>(
    fetcher: &ChapterFetcher<S>,
    out: &mut impl Write,
    book: &str,
    chapter: u32,
    verse: u32,
    translations: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let entry = resolve_or_bail(book)?;
    let versions = (!translations.is_empty()).then_some(translations);
    let rows = compare_versions(fetcher, entry.code, chapter, verse, versions);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
    } else {
        write!(out, "{}", format_comparison(book, chapter, verse, &rows))?;
    }
    Ok(())
}
