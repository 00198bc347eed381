use bible_core::books::{Testament, DEFAULT_VERSION, TRANSLATIONS};
use bible_core::format::{
    book_not_found, format_books, format_chapter, format_comparison, format_search, format_verses,
};
use bible_core::{compare, resolve, search, BibleError, ChapterFetcher, PageSource};
use serde_json::{json, Value};

type ToolResult = bible_core::Result<String>;

fn tool(name: &str, description: &str, input_schema: Value) -> Value {
    json!({"name": name, "description": description, "inputSchema": input_schema })
}

fn version_schema() -> Value {
    let codes: Vec<&str> = TRANSLATIONS.iter().map(|t| t.code).collect();
    json!({"type":"string","description":"Bible translation version (default: GAE)","enum":codes,"default":DEFAULT_VERSION})
}

pub fn tools_list() -> Vec<Value> {
    vec![
        tool("get-chapter", "Get all verses from a specific chapter of the Korean Bible", json!({"type":"object","properties":{
            "book":{"type":"string","description":"Book name (English or Korean) or code (e.g., 'Genesis', '창세기', 'gen')"},
            "chapter":{"type":"number","description":"Chapter number"},
            "version":version_schema()
        },"required":["book","chapter"]})),
        tool("get-verses", "Get specific verse(s) from a chapter", json!({"type":"object","properties":{
            "book":{"type":"string","description":"Book name (English or Korean) or code"},
            "chapter":{"type":"number","description":"Chapter number"},
            "verseStart":{"type":"number","description":"Starting verse number"},
            "verseEnd":{"type":"number","description":"Ending verse number (optional, defaults to verseStart)"},
            "version":version_schema()
        },"required":["book","chapter","verseStart"]})),
        tool("search-bible", "Search for verses containing specific keywords (searches limited books for demo)", json!({"type":"object","properties":{
            "query":{"type":"string","description":"Search query (Korean or English)"},
            "version":version_schema(),
            "books":{"type":"array","items":{"type":"string"},"description":"Books to search (only the first two are scanned, chapters 1-3)"}
        },"required":["query"]})),
        tool("list-books", "List all available books in the Bible", json!({"type":"object","properties":{
            "testament":{"type":"string","description":"Filter by testament (OT/NT, optional)","enum":["OT","NT"]}
        }})),
        tool("compare-translations", "Compare a verse across different Korean translations", json!({"type":"object","properties":{
            "book":{"type":"string","description":"Book name (English or Korean) or code"},
            "chapter":{"type":"number","description":"Chapter number"},
            "verse":{"type":"number","description":"Verse number"},
            "versions":{"type":"array","items":{"type":"string"},"description":"Array of version codes to compare (default: all versions)"}
        },"required":["book","chapter","verse"]})),
    ]
}

fn arg_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(|v| v.as_str())
}

/// Integers, integral floats and digit strings are all accepted.
fn arg_u32(args: &Value, key: &str) -> Option<u32> {
    let v = args.get(key)?;
    let n = v
        .as_u64()
        .or_else(|| v.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
        .or_else(|| v.as_str().and_then(|s| s.trim().parse::<u64>().ok()))?;
    u32::try_from(n).ok()
}

fn arg_strings(args: &Value, key: &str) -> Option<Vec<String>> {
    args.get(key)
        .and_then(|v| v.as_array())
        .map(|a| a.iter().filter_map(|x| x.as_str().map(String::from)).collect())
}

fn require_str<'a>(args: &'a Value, key: &str) -> bible_core::Result<&'a str> {
    arg_str(args, key).ok_or_else(|| BibleError::InvalidArgument(format!("missing required argument '{}'", key)))
}

fn require_positive(args: &Value, key: &str) -> bible_core::Result<u32> {
    arg_u32(args, key)
        .filter(|n| *n > 0)
        .ok_or_else(|| BibleError::InvalidArgument(format!("'{}' must be a positive integer", key)))
}

fn version_arg(args: &Value) -> &str {
    arg_str(args, "version").unwrap_or(DEFAULT_VERSION)
}

fn get_chapter<S: PageSource>(fetcher: &ChapterFetcher<S>, args: &Value) -> ToolResult {
    let book = require_str(args, "book")?;
    let chapter = require_positive(args, "chapter")?;
    let Some(entry) = resolve(book) else { return Ok(book_not_found(book, true)) };
    let ch = fetcher.fetch(entry.code, chapter, version_arg(args))?;
    Ok(format_chapter(&ch))
}

fn get_verses<S: PageSource>(fetcher: &ChapterFetcher<S>, args: &Value) -> ToolResult {
    let book = require_str(args, "book")?;
    let chapter = require_positive(args, "chapter")?;
    let start = require_positive(args, "verseStart")?;
    let end = arg_u32(args, "verseEnd");
    let Some(entry) = resolve(book) else { return Ok(book_not_found(book, false)) };
    let ch = fetcher.fetch(entry.code, chapter, version_arg(args))?;
    Ok(format_verses(&ch, start, end))
}

fn search_bible<S: PageSource>(fetcher: &ChapterFetcher<S>, args: &Value) -> ToolResult {
    let query = require_str(args, "query")?;
    let books = arg_strings(args, "books");
    let subset: Option<Vec<&str>> = books.as_ref().map(|b| b.iter().map(|s| s.as_str()).collect());
    let hits = search(fetcher, query, version_arg(args), subset.as_deref());
    Ok(format_search(query, &hits))
}

fn list_books(args: &Value) -> ToolResult {
    let filter = match arg_str(args, "testament") {
        None => None,
        Some(t) => Some(
            Testament::parse(t)
                .ok_or_else(|| BibleError::InvalidArgument(format!("testament must be OT or NT, got '{}'", t)))?,
        ),
    };
    Ok(format_books(filter))
}

fn compare_translations<S: PageSource>(fetcher: &ChapterFetcher<S>, args: &Value) -> ToolResult {
    let book = require_str(args, "book")?;
    let chapter = require_positive(args, "chapter")?;
    let verse = require_positive(args, "verse")?;
    let Some(entry) = resolve(book) else { return Ok(book_not_found(book, false)) };
    let versions = arg_strings(args, "versions");
    let rows = compare(fetcher, entry.code, chapter, verse, versions.as_deref());
    Ok(format_comparison(book, chapter, verse, &rows))
}

/// `tools/call` body. Never fails: errors come back as text content.
pub fn handle_call<S: PageSource>(fetcher: &ChapterFetcher<S>, params: &Value) -> Value {
    let name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
    let args = params.get("arguments").cloned().unwrap_or(json!({}));
    let outcome = match name {
        "get-chapter" => get_chapter(fetcher, &args),
        "get-verses" => get_verses(fetcher, &args),
        "search-bible" => search_bible(fetcher, &args),
        "list-books" => list_books(&args),
        "compare-translations" => compare_translations(fetcher, &args),
        _ => Ok(format!("Unknown tool: {}", name)),
    };
    let text = outcome.unwrap_or_else(|e| format!("Error: {}", e));
    json!({ "content": [{ "type": "text", "text": text }] })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Fixture {
        html: String,
        fail: bool,
        calls: RefCell<Vec<String>>,
    }

    impl PageSource for Fixture {
        fn get_page(&self, url: &str) -> bible_core::Result<String> {
            self.calls.borrow_mut().push(url.to_string());
            if self.fail {
                return Err(BibleError::InvalidArgument("connection refused".into()));
            }
            Ok(self.html.clone())
        }
    }

    fn fetcher(fail: bool) -> ChapterFetcher<Fixture> {
        let mut body = String::new();
        for n in 1..=31 {
            body.push_str(&format!("<span>{n} 태초에 {n}</span><span>{n} 중복</span>"));
        }
        let html = format!("<html><body>{}</body></html>", body);
        ChapterFetcher::new(Fixture { html, fail, calls: RefCell::new(Vec::new()) }, "http://fixture/read.php")
    }

    fn text(v: &Value) -> &str {
        v["content"][0]["text"].as_str().unwrap()
    }

    #[test]
    fn lists_five_tools() {
        let names: Vec<String> = tools_list().iter().map(|t| t["name"].as_str().unwrap().to_string()).collect();
        assert_eq!(names, ["get-chapter", "get-verses", "search-bible", "list-books", "compare-translations"]);
        assert_eq!(tools_list()[0]["inputSchema"]["properties"]["version"]["enum"][4], "CEV");
    }

    #[test]
    fn get_chapter_renders_all_verses() {
        let f = fetcher(false);
        let r = handle_call(&f, &json!({"name":"get-chapter","arguments":{"book":"창세기","chapter":1}}));
        let t = text(&r);
        assert!(t.starts_with("# Genesis (창세기) 1\n**Translation:** 개역개정 (Revised Korean)\n\n"));
        assert_eq!(t.matches("**").count(), 2 + 31 * 2);
        assert!(!t.contains("중복"));
        assert!(f.source().calls.borrow()[0].ends_with("version=GAE&book=gen&chap=1"));
    }

    #[test]
    fn get_verses_filters_range() {
        let f = fetcher(false);
        let r = handle_call(&f, &json!({"name":"get-verses","arguments":{"book":"Genesis","chapter":1,"verseStart":1,"verseEnd":2,"version":"NIR"}}));
        assert_eq!(
            text(&r),
            "# Genesis 1:1-2\n**Translation:** 새번역성경 (New Korean Revised Version)\n\n**1.** 태초에 1\n\n**2.** 태초에 2\n\n"
        );
    }

    #[test]
    fn unknown_book_is_text() {
        let f = fetcher(false);
        let r = handle_call(&f, &json!({"name":"get-chapter","arguments":{"book":"InvalidBookXYZ","chapter":1}}));
        assert_eq!(text(&r), "Error: Book 'InvalidBookXYZ' not found. Use list-books to see available books.");
        let r = handle_call(&f, &json!({"name":"compare-translations","arguments":{"book":"InvalidBookXYZ","chapter":1,"verse":1}}));
        assert_eq!(text(&r), "Error: Book 'InvalidBookXYZ' not found.");
        assert!(f.source().calls.borrow().is_empty());
    }

    #[test]
    fn unknown_tool_and_bad_args() {
        let f = fetcher(false);
        assert_eq!(text(&handle_call(&f, &json!({"name":"nope"}))), "Unknown tool: nope");
        let r = handle_call(&f, &json!({"name":"get-chapter","arguments":{"chapter":1}}));
        assert_eq!(text(&r), "Error: missing required argument 'book'");
        let r = handle_call(&f, &json!({"name":"get-chapter","arguments":{"book":"gen","chapter":0}}));
        assert_eq!(text(&r), "Error: 'chapter' must be a positive integer");
    }

    #[test]
    fn network_error_is_text() {
        let f = fetcher(true);
        let r = handle_call(&f, &json!({"name":"get-chapter","arguments":{"book":"gen","chapter":"2"}}));
        assert_eq!(text(&r), "Error: connection refused");
    }

    #[test]
    fn compare_marks_failures_inline() {
        let f = fetcher(true);
        let r = handle_call(&f, &json!({"name":"compare-translations","arguments":{"book":"요한복음","chapter":3,"verse":16,"versions":["GAE","CEV"]}}));
        assert_eq!(
            text(&r),
            "# 요한복음 3:16 - Translation Comparison\n\n## 개역개정 (Revised Korean)\n(Error loading this version)\n\n## CEV (Contemporary English Version)\n(Error loading this version)\n\n"
        );
    }

    #[test]
    fn search_with_subset() {
        let f = fetcher(false);
        let r = handle_call(&f, &json!({"name":"search-bible","arguments":{"query":"태초에 31","books":["John","Acts","Romans"]}}));
        assert!(text(&r).starts_with("# Search Results for \"태초에 31\"\nFound 6 verses:\n\n**John 1:31**\n"));
        let calls = f.source().calls.borrow();
        assert_eq!(calls.len(), 6);
        assert!(calls.iter().all(|u| !u.contains("book=rom")));
        drop(calls);
        let r = handle_call(&f, &json!({"name":"search-bible","arguments":{"query":"없는말"}}));
        assert!(text(&r).starts_with("No results found"));
    }

    #[test]
    fn list_books_filter() {
        let f = fetcher(false);
        let r = handle_call(&f, &json!({"name":"list-books","arguments":{"testament":"OT"}}));
        assert!(text(&r).contains("- **Malachi** (말라기) - code: `mal`"));
        assert!(!text(&r).contains("Matthew"));
        let r = handle_call(&f, &json!({"name":"list-books","arguments":{"testament":"XX"}}));
        assert!(text(&r).starts_with("Error: testament must be OT or NT"));
    }

    #[test]
    fn numeric_argument_forms() {
        let args = json!({"a":3,"b":3.0,"c":"3","d":3.5,"e":-1,"f":"x"});
        assert_eq!(arg_u32(&args, "a"), Some(3));
        assert_eq!(arg_u32(&args, "b"), Some(3));
        assert_eq!(arg_u32(&args, "c"), Some(3));
        assert_eq!(arg_u32(&args, "d"), None);
        assert_eq!(arg_u32(&args, "e"), None);
        assert_eq!(arg_u32(&args, "f"), None);
    }
}
