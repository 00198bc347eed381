use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://www.bskorea.or.kr/bible/korbibReadpage.php";

pub fn bible_home() -> PathBuf {
    if let Ok(p) = std::env::var("BIBLE_KO_DIR") {
        return PathBuf::from(p);
    }
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bible-ko")
}

pub fn debug_enabled() -> bool {
    std::env::var("BIBLE_KO_DEBUG").ok().as_deref() == Some("1")
}

/// Upstream reading page. `BIBLE_KO_BASE_URL` points it elsewhere (e.g. a local fixture server).
pub fn base_url() -> String {
    std::env::var("BIBLE_KO_BASE_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
