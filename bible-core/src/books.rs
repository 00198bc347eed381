use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Testament {
    OT,
    NT,
}

impl Testament {
    pub fn heading(&self) -> &'static str {
        match self {
            Testament::OT => "Old Testament",
            Testament::NT => "New Testament",
        }
    }

    pub fn parse(s: &str) -> Option<Testament> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ot" | "old" => Some(Testament::OT),
            "nt" | "new" => Some(Testament::NT),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct BookEntry {
    pub english: &'static str,
    pub code: &'static str,
    pub korean: &'static str,
    pub testament: Testament,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct TranslationEntry {
    pub code: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_VERSION: &str = "GAE";

const fn ot(english: &'static str, code: &'static str, korean: &'static str) -> BookEntry {
    BookEntry { english, code, korean, testament: Testament::OT }
}

const fn nt(english: &'static str, code: &'static str, korean: &'static str) -> BookEntry {
    BookEntry { english, code, korean, testament: Testament::NT }
}

/// Canonical order. Codes are the ones the upstream reading page expects.
pub static BOOKS: [BookEntry; 66] = [
    ot("Genesis", "gen", "창세기"),
    ot("Exodus", "exo", "출애굽기"),
    ot("Leviticus", "lev", "레위기"),
    ot("Numbers", "num", "민수기"),
    ot("Deuteronomy", "deu", "신명기"),
    ot("Joshua", "jos", "여호수아"),
    ot("Judges", "jdg", "사사기"),
    ot("Ruth", "rut", "룻기"),
    ot("1 Samuel", "1sa", "사무엘상"),
    ot("2 Samuel", "2sa", "사무엘하"),
    ot("1 Kings", "1ki", "열왕기상"),
    ot("2 Kings", "2ki", "열왕기하"),
    ot("1 Chronicles", "1ch", "역대상"),
    ot("2 Chronicles", "2ch", "역대하"),
    ot("Ezra", "ezr", "에스라"),
    ot("Nehemiah", "neh", "느헤미야"),
    ot("Esther", "est", "에스더"),
    ot("Job", "job", "욥기"),
    ot("Psalms", "psa", "시편"),
    ot("Proverbs", "pro", "잠언"),
    ot("Ecclesiastes", "ecc", "전도서"),
    ot("Song of Solomon", "sng", "아가"),
    ot("Isaiah", "isa", "이사야"),
    ot("Jeremiah", "jer", "예레미야"),
    ot("Lamentations", "lam", "예레미야애가"),
    ot("Ezekiel", "ezk", "에스겔"),
    ot("Daniel", "dan", "다니엘"),
    ot("Hosea", "hos", "호세아"),
    ot("Joel", "jol", "요엘"),
    ot("Amos", "amo", "아모스"),
    ot("Obadiah", "oba", "오바댜"),
    ot("Jonah", "jon", "요나"),
    ot("Micah", "mic", "미가"),
    ot("Nahum", "nam", "나훔"),
    ot("Habakkuk", "hab", "하박국"),
    ot("Zephaniah", "zep", "스바냐"),
    ot("Haggai", "hag", "학개"),
    ot("Zechariah", "zec", "스가랴"),
    ot("Malachi", "mal", "말라기"),
    nt("Matthew", "mat", "마태복음"),
    nt("Mark", "mrk", "마가복음"),
    nt("Luke", "luk", "누가복음"),
    nt("John", "jhn", "요한복음"),
    nt("Acts", "act", "사도행전"),
    nt("Romans", "rom", "로마서"),
    nt("1 Corinthians", "1co", "고린도전서"),
    nt("2 Corinthians", "2co", "고린도후서"),
    nt("Galatians", "gal", "갈라디아서"),
    nt("Ephesians", "eph", "에베소서"),
    nt("Philippians", "php", "빌립보서"),
    nt("Colossians", "col", "골로새서"),
    nt("1 Thessalonians", "1th", "데살로니가전서"),
    nt("2 Thessalonians", "2th", "데살로니가후서"),
    nt("1 Timothy", "1ti", "디모데전서"),
    nt("2 Timothy", "2ti", "디모데후서"),
    nt("Titus", "tit", "디도서"),
    nt("Philemon", "phm", "빌레몬서"),
    nt("Hebrews", "heb", "히브리서"),
    nt("James", "jas", "야고보서"),
    nt("1 Peter", "1pe", "베드로전서"),
    nt("2 Peter", "2pe", "베드로후서"),
    nt("1 John", "1jn", "요한일서"),
    nt("2 John", "2jn", "요한이서"),
    nt("3 John", "3jn", "요한삼서"),
    nt("Jude", "jud", "유다서"),
    nt("Revelation", "rev", "요한계시록"),
];

pub static TRANSLATIONS: [TranslationEntry; 5] = [
    TranslationEntry { code: "GAE", name: "개역개정 (Revised Korean)" },
    TranslationEntry { code: "GAE1", name: "개역한글 (Korean Revised Version)" },
    TranslationEntry { code: "NIR", name: "새번역성경 (New Korean Revised Version)" },
    TranslationEntry { code: "KOR", name: "공동번역 (Common Translation)" },
    TranslationEntry { code: "CEV", name: "CEV (Contemporary English Version)" },
];

pub fn book_by_code(code: &str) -> Option<&'static BookEntry> {
    BOOKS.iter().find(|b| b.code == code)
}

/// Display name for a version code; unknown codes are shown as-is.
pub fn translation_name(code: &str) -> &str {
    TRANSLATIONS
        .iter()
        .find(|t| t.code == code)
        .map(|t| t.name)
        .unwrap_or(code)
}

pub fn translation_codes() -> Vec<&'static str> {
    TRANSLATIONS.iter().map(|t| t.code).collect()
}

pub fn books_in(testament: Option<Testament>) -> impl Iterator<Item = &'static BookEntry> {
    BOOKS
        .iter()
        .filter(move |b| testament.map_or(true, |t| b.testament == t))
}
