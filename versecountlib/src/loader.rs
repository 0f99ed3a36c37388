//! Book line loading and normalization.
//!
//! Reads one book file into a sequence of cleaned lines: each line is trimmed,
//! blank lines are dropped, and characters outside the allowed set are
//! stripped. The allowed set is space, printable ASCII (`!`..=`~`), and the
//! halfwidth/fullwidth forms block (`U+FF00`..=`U+FFEF`); everything else
//! (control characters, smart quotes, stray formatting marks) is removed.

use std::fs;
use std::path::Path;

use crate::error::VersecountError;
use crate::Result;

/// Read a book file and return its cleaned lines in reading order.
///
/// A read failure is fatal for the book: the caller gets a
/// [`VersecountError::BookRead`] and no partial data.
pub fn load_book(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| VersecountError::BookRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(scrub)
        .collect())
}

/// Strip every character outside the allowed set.
///
/// Runs after the blank-line drop, so a line may come back empty; such lines
/// are kept in the sequence.
pub fn scrub(line: &str) -> String {
    line.chars().filter(|&c| is_allowed(c)).collect()
}

/// Allowed characters: space, printable ASCII, halfwidth/fullwidth forms.
fn is_allowed(c: char) -> bool {
    c == ' ' || ('!'..='~').contains(&c) || ('\u{FF00}'..='\u{FFEF}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scrub_keeps_ordinary_text() {
        assert_eq!(scrub("1 In the beginning"), "1 In the beginning");
        assert_eq!(scrub("God's word, \"quoted\"!"), "God's word, \"quoted\"!");
    }

    #[test]
    fn test_scrub_removes_control_and_formatting_marks() {
        assert_eq!(scrub("In\u{0000} the\u{FEFF} beginning"), "In the beginning");
        assert_eq!(scrub("\u{201C}quoted\u{201D}"), "quoted");
        assert_eq!(scrub("tab\there"), "tabhere");
    }

    #[test]
    fn test_scrub_keeps_fullwidth_block() {
        assert_eq!(scrub("ＡＢ｡"), "ＡＢ｡");
    }

    #[test]
    fn test_load_book_trims_and_drops_blanks() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("01.txt");
        fs::write(&path, "Genesis\n\n  1 In the beginning  \n\t\nChapter 2\n").unwrap();

        let lines = load_book(&path).unwrap();
        assert_eq!(lines, vec!["Genesis", "1 In the beginning", "Chapter 2"]);
    }

    #[test]
    fn test_load_book_keeps_lines_emptied_by_scrub() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("01.txt");
        fs::write(&path, "Genesis\n\u{2020}\u{2020}\nChapter 1\n").unwrap();

        let lines = load_book(&path).unwrap();
        assert_eq!(lines, vec!["Genesis", "", "Chapter 1"]);
    }

    #[test]
    fn test_load_book_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = load_book(&path).unwrap_err();
        assert!(matches!(err, VersecountError::BookRead { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
