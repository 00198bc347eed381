use bible_core::books::{books_in, Testament};
use bible_core::format::format_books;
use std::io::Write;

pub fn books(out: &mut impl Write, testament: Option<&str>, json: bool) -> anyhow::Result<()> {
    let filter = match testament {
        Some(t) => Some(
            Testament::parse(t).ok_or_else(|| anyhow::anyhow!("testament must be OT or NT, got '{}'", t))?,
        ),
        None => None,
    };
    if json {
        let items: Vec<_> = books_in(filter).collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
    } else {
        write!(out, "{}", format_books(filter))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::fixture::output;

    #[test]
    fn bad_testament_is_an_error() {
        let mut buf = Vec::new();
        let err = books(&mut buf, Some("apocrypha"), false).unwrap_err();
        assert_eq!(err.to_string(), "testament must be OT or NT, got 'apocrypha'");
        assert!(buf.is_empty());
    }

    #[test]
    fn json_listing_is_filtered() {
        let mut buf = Vec::new();
        books(&mut buf, Some("nt"), true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
        let items = v.as_array().unwrap();
        assert_eq!(items.len(), 27);
        assert_eq!(items[0]["english"], "Matthew");
        assert_eq!(items[0]["testament"], "NT");
    }
}
