//! Chapter segmentation.
//!
//! Splits a book's cleaned line sequence into chapters. The first line of a
//! book file is its title and is discarded outright; every chapter after the
//! first is opened by a heading line ("Chapter N" or "Psalm N"). The first
//! chapter simply starts at the line after the title, heading or not.

use std::path::Path;

use crate::error::VersecountError;
use crate::Result;

/// An ordered, non-empty group of lines belonging to one chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// The chapter's lines, heading included
    pub lines: Vec<String>,
}

impl Chapter {
    /// Number of verses: every line except the heading.
    pub fn verse_count(&self) -> u64 {
        self.lines.len().saturating_sub(1) as u64
    }
}

/// Whether a line opens a new chapter.
///
/// True iff the lowercased first space-separated token is `chapter` or `psalm`
/// and the second token parses as an integer. A missing or non-numeric second
/// token means "not a heading", never an error.
pub fn is_chapter_heading(line: &str) -> bool {
    let mut tokens = line.trim().split(' ');
    let keyword = match tokens.next() {
        Some(token) => token.to_lowercase(),
        None => return false,
    };
    if keyword != "chapter" && keyword != "psalm" {
        return false;
    }
    tokens.next().is_some_and(|n| n.parse::<i32>().is_ok())
}

/// Split a book's cleaned lines into chapters.
///
/// The path is used only for error reporting. Fails with
/// [`VersecountError::BookTooShort`] when there are fewer than two lines: the
/// title line is dropped and at least one content line must remain.
pub fn split_into_chapters(path: impl AsRef<Path>, lines: &[String]) -> Result<Vec<Chapter>> {
    if lines.len() < 2 {
        return Err(VersecountError::BookTooShort {
            path: path.as_ref().to_path_buf(),
            lines: lines.len(),
        });
    }

    let mut chapters = Vec::new();
    let mut current = vec![lines[1].clone()];
    for line in &lines[2..] {
        if is_chapter_heading(line) {
            chapters.push(Chapter { lines: current });
            current = Vec::new();
        }
        current.push(line.clone());
    }
    chapters.push(Chapter { lines: current });

    Ok(chapters)
}
