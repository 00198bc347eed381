use crate::books::{book_by_code, translation_name};
use crate::error::Result;
use crate::extract::extract_verses;
use crate::Chapter;
use encoding_rs::Encoding;
use reqwest::blocking::Client;
use std::sync::OnceLock;

/// Where reading pages come from. The HTTP implementation is the only one
/// shipped; tests substitute fixtures.
pub trait PageSource {
    fn get_page(&self, url: &str) -> Result<String>;
}

fn http_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(concat!("bible-ko/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// One GET per page. The status code is not checked: whatever body comes
/// back is handed to the extractor.
#[derive(Default)]
pub struct HttpSource;

impl PageSource for HttpSource {
    fn get_page(&self, url: &str) -> Result<String> {
        let resp = http_client().get(url).send()?;
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let bytes = resp.bytes()?;
        Ok(decode_html_bytes(&bytes, content_type.as_deref()))
    }
}

pub fn chapter_url(base: &str, version: &str, book_code: &str, chapter: u32) -> Result<String> {
    let mut url = url::Url::parse(base)?;
    url.query_pairs_mut()
        .append_pair("version", version)
        .append_pair("book", book_code)
        .append_pair("chap", &chapter.to_string());
    Ok(url.to_string())
}

pub struct ChapterFetcher<S: PageSource> {
    source: S,
    base_url: String,
}

impl ChapterFetcher<HttpSource> {
    /// HTTP fetcher against the configured upstream.
    pub fn from_env() -> Self {
        ChapterFetcher::new(HttpSource, crate::config::base_url())
    }
}

impl<S: PageSource> ChapterFetcher<S> {
    pub fn new(source: S, base_url: impl Into<String>) -> Self {
        Self { source, base_url: base_url.into() }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn fetch(&self, book_code: &str, chapter: u32, version: &str) -> Result<Chapter> {
        let url = chapter_url(&self.base_url, version, book_code, chapter)?;
        let html = self.source.get_page(&url)?;
        let verses = extract_verses(&html);
        let book = book_by_code(book_code);
        Ok(Chapter {
            book: book.map(|b| b.english).unwrap_or(book_code).to_string(),
            book_korean: book.map(|b| b.korean).unwrap_or("").to_string(),
            chapter,
            version: version.to_string(),
            version_name: translation_name(version).to_string(),
            verses,
        })
    }
}

/// Decode a page body: BOM, then the header charset, then a `<meta>`
/// declaration, then UTF-8, falling back to EUC-KR.
pub fn decode_html_bytes(bytes: &[u8], content_type: Option<&str>) -> String {
    if let Some((enc, bom_len)) = Encoding::for_bom(bytes) {
        let (cow, _) = enc.decode_without_bom_handling(&bytes[bom_len..]);
        return cow.into_owned();
    }
    let label = content_type
        .and_then(charset_from_content_type)
        .or_else(|| sniff_meta_charset(&bytes[..bytes.len().min(1024)]));
    if let Some(enc) = label.and_then(|l| Encoding::for_label(l.as_bytes())) {
        let (cow, _) = enc.decode_without_bom_handling(bytes);
        return cow.into_owned();
    }
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (cow, _, _) = encoding_rs::EUC_KR.decode(bytes);
            cow.into_owned()
        }
    }
}

fn charset_from_content_type(ct: &str) -> Option<String> {
    ct.split(';')
        .map(|p| p.trim())
        .find_map(|p| {
            let (k, v) = p.split_once('=')?;
            k.trim().eq_ignore_ascii_case("charset")
                .then(|| v.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        })
        .filter(|s| !s.is_empty())
}

fn sniff_meta_charset(head: &[u8]) -> Option<String> {
    // crude scan for charset=... inside the first bytes of the document
    let lower: Vec<u8> = head.iter().map(|b| b.to_ascii_lowercase()).collect();
    let pos = find_subslice(&lower, b"charset")?;
    let rest = &lower[pos + 7..];
    let mut i = 0usize;
    while i < rest.len() && rest[i].is_ascii_whitespace() { i += 1; }
    if i >= rest.len() || rest[i] != b'=' { return None; }
    i += 1;
    while i < rest.len() && (rest[i].is_ascii_whitespace() || rest[i] == b'"' || rest[i] == b'\'') { i += 1; }
    let mut j = i;
    while j < rest.len() && (rest[j].is_ascii_alphanumeric() || rest[j] == b'-' || rest[j] == b'_') { j += 1; }
    if j == i { return None; }
    Some(String::from_utf8_lossy(&rest[i..j]).to_string())
}

fn find_subslice(hay: &[u8], needle: &[u8]) -> Option<usize> {
    hay.windows(needle.len()).position(|w| w == needle)
}
