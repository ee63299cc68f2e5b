use anyhow::{Context, Result};
use std::path::Path;

/// Page separator pdftotext writes between pages.
pub const FORM_FEED: char = '\x0c';

/// Pages of one input file, in order.
///
/// A `.json` file holds an array of page strings; anything else is plain text
/// with pages separated by form feeds.
pub fn read_pages(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("{} is not a JSON array of page strings", path.display()))
    } else {
        Ok(split_pages(&content))
    }
}

/// Split text on form feeds. A trailing empty page (pdftotext ends every page,
/// including the last, with a form feed) is dropped.
pub fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split(FORM_FEED).map(str::to_string).collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn split_on_form_feed() {
        assert_eq!(split_pages("a\nb\x0cc\x0c"), vec!["a\nb", "c"]);
    }

    #[test]
    fn single_page_without_separator() {
        assert_eq!(split_pages("only page"), vec!["only page"]);
        assert_eq!(split_pages(""), vec![""]);
    }

    #[test]
    fn inner_blank_pages_are_kept() {
        assert_eq!(split_pages("a\x0c\x0cb"), vec!["a", "", "b"]);
    }

    #[test]
    fn reads_json_pages() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"["uno", "dos\ntres"]"#).unwrap();
        let pages = read_pages(file.path()).unwrap();
        assert_eq!(pages, vec!["uno", "dos\ntres"]);
    }

    #[test]
    fn rejects_json_that_is_not_pages() {
        let mut file = tempfile::Builder::new().suffix(".JSON").tempfile().unwrap();
        write!(file, r#"{{"pages": 1}}"#).unwrap();
        assert!(read_pages(file.path()).is_err());
    }

    #[test]
    fn reads_text_pages() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "pagina 1\x0cpagina 2\x0c").unwrap();
        assert_eq!(read_pages(file.path()).unwrap(), vec!["pagina 1", "pagina 2"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_pages(&dir.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
