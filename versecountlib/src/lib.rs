//! # versecountlib
//!
//! Chapter-level word, character, and verse statistics for a text corpus of
//! 66 books (the King James Bible, one plain-text file per book).
//!
//! ## Overview
//!
//! The corpus is processed in a single forward pass, one book at a time:
//!
//! - **Loader**: reads a book's lines, trims them, drops blanks, and strips
//!   characters outside an explicit allow-list.
//! - **Segmenter**: drops the book-title line and splits the rest into
//!   chapters at "Chapter N" / "Psalm N" heading lines.
//! - **Counter**: per chapter, counts words and characters (a leading verse
//!   number on a line is excluded from both) and verses (lines minus the
//!   heading).
//! - **Writers**: one tab-delimited summary row per chapter, and optionally a
//!   combined document concatenating every book's cleaned lines.
//! - **Runner**: iterates the books in order, accumulates grand totals, and
//!   reports what the run produced.
//!
//! ## Example
//!
//! ```rust
//! use std::fs;
//! use tempfile::tempdir;
//! use versecountlib::{run, CorpusLayout, RunOptions};
//!
//! // Set up a two-book corpus
//! let dir = tempdir().unwrap();
//! let corpus = dir.path().join("KJV");
//! fs::create_dir(&corpus).unwrap();
//! fs::write(corpus.join("01.txt"), "Genesis\nChapter 1\n1 In the beginning\n").unwrap();
//! fs::write(corpus.join("02.txt"), "Exodus\n1 Now these are the names\n").unwrap();
//!
//! let options = RunOptions::new()
//!     .layout(CorpusLayout::new(&corpus).books(2))
//!     .summary_path(dir.path().join("wordcount.txt"));
//! let summary = run(&options).unwrap();
//!
//! assert_eq!(summary.books, 2);
//! assert_eq!(summary.chapters, 2);
//! assert_eq!(summary.totals.words, 10);
//! ```

pub mod corpus;
pub mod error;
pub mod loader;
pub mod report;
pub mod runner;
pub mod segment;
pub mod stats;

pub use corpus::{CorpusLayout, BOOK_COUNT};
pub use error::VersecountError;
pub use loader::{load_book, scrub};
pub use report::{CombinedWriter, SummaryWriter};
pub use runner::{run, RunOptions, RunSummary};
pub use segment::{is_chapter_heading, split_into_chapters, Chapter};
pub use stats::{line_char_count, line_word_count, ChapterStats, CorpusTotals};

/// Result type for versecountlib operations
pub type Result<T> = std::result::Result<T, VersecountError>;
