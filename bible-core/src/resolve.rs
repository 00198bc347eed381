use crate::books::{BookEntry, BOOKS};

/// Resolve free-form input (English name, Korean name or code) to a book.
///
/// Exact matches win over substring matches; ties go to the first book in
/// canonical order. Korean names are compared against the raw input.
pub fn resolve(input: &str) -> Option<&'static BookEntry> {
    let q = input.trim().to_lowercase();
    BOOKS
        .iter()
        .find(|b| b.english.to_lowercase() == q || b.korean == input || b.code == q)
        .or_else(|| {
            BOOKS
                .iter()
                .find(|b| b.english.to_lowercase().contains(&q) || b.korean.contains(input))
        })
}

pub fn resolve_code(input: &str) -> Option<&'static str> {
    resolve(input).map(|b| b.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_and_name_resolves_to_itself() {
        for b in BOOKS.iter() {
            assert_eq!(resolve_code(b.code), Some(b.code), "code {}", b.code);
            assert_eq!(resolve_code(b.english), Some(b.code), "name {}", b.english);
            assert_eq!(resolve_code(&b.english.to_uppercase()), Some(b.code));
            assert_eq!(resolve_code(b.korean), Some(b.code), "korean {}", b.korean);
        }
    }

    #[test]
    fn exact_beats_substring() {
        // "john" is a substring of "1 John" etc. but an exact match for John
        assert_eq!(resolve_code("john"), Some("jhn"));
        // 예레미야 is a prefix of 예레미야애가
        assert_eq!(resolve_code("예레미야"), Some("jer"));
        assert_eq!(resolve_code("  Genesis  "), Some("gen"));
    }

    #[test]
    fn substring_takes_first_in_table_order() {
        assert_eq!(resolve_code("sam"), Some("1sa"));
        assert_eq!(resolve_code("kings"), Some("1ki"));
        assert_eq!(resolve_code("복음"), Some("mat"));
        assert_eq!(resolve_code("Rev"), Some("rev"));
    }

    #[test]
    fn empty_input_resolves_to_genesis() {
        assert_eq!(resolve_code(""), Some("gen"));
        assert_eq!(resolve_code("   "), Some("gen"));
    }

    #[test]
    fn unknown_is_none() {
        assert!(resolve("InvalidBookXYZ").is_none());
    }
}
