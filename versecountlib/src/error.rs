//! Error types for versecountlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while processing the corpus
#[derive(Error, Debug)]
pub enum VersecountError {
    /// Failed to read a book file
    #[error("failed to read book '{path}': {source}")]
    BookRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A book has too few cleaned lines to segment into chapters
    #[error("book '{path}' has only {lines} cleaned line(s); a title line plus content are required")]
    BookTooShort { path: PathBuf, lines: usize },

    /// IO error on an output stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
