//! Corpus layout: where book files live and how they are named.
//!
//! Book files sit at deterministic paths built from a directory, an optional
//! prefix, a two-digit book number, and a suffix (e.g. `KJV/01.txt`).

use std::path::PathBuf;

/// Number of books in the corpus.
pub const BOOK_COUNT: u32 = 66;

/// Describes how book file paths are derived from book numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLayout {
    /// Directory containing the book files
    pub dir: PathBuf,
    /// Filename prefix before the book number
    pub prefix: String,
    /// Filename suffix after the book number
    pub suffix: String,
    /// Number of books to process (1-based, contiguous)
    pub book_count: u32,
}

impl Default for CorpusLayout {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("KJV"),
            prefix: String::new(),
            suffix: ".txt".to_string(),
            book_count: BOOK_COUNT,
        }
    }
}

impl CorpusLayout {
    /// Create a layout rooted at the given directory, with default naming.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Builder: set the filename prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Builder: set the filename suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Builder: set the number of books.
    pub fn books(mut self, count: u32) -> Self {
        self.book_count = count;
        self
    }

    /// Resolve the file path for a 1-based book number.
    ///
    /// Book numbers are zero-padded to two digits; numbers of three or more
    /// digits print at natural width.
    pub fn book_path(&self, book: u32) -> PathBuf {
        self.dir
            .join(format!("{}{:02}{}", self.prefix, book, self.suffix))
    }

    /// Iterate the book numbers of this layout in reading order.
    pub fn book_numbers(&self) -> impl Iterator<Item = u32> {
        1..=self.book_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = CorpusLayout::default();
        assert_eq!(layout.book_count, 66);
        assert_eq!(layout.book_path(1), PathBuf::from("KJV/01.txt"));
    }

    #[test]
    fn test_book_path_zero_padding() {
        let layout = CorpusLayout::new("corpus");
        assert_eq!(layout.book_path(3), PathBuf::from("corpus/03.txt"));
        assert_eq!(layout.book_path(40), PathBuf::from("corpus/40.txt"));
    }

    #[test]
    fn test_book_path_prefix_suffix() {
        let layout = CorpusLayout::new("books").prefix("kjv-").suffix(".text");
        assert_eq!(layout.book_path(7), PathBuf::from("books/kjv-07.text"));
    }

    #[test]
    fn test_book_numbers() {
        let layout = CorpusLayout::default().books(3);
        let numbers: Vec<u32> = layout.book_numbers().collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
