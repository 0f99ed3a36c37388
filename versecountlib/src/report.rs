//! Output streams: the tab-delimited summary and the combined text.
//!
//! Both writers truncate their target file on creation and hold a single
//! buffered handle for the whole run. A failed write of one row or line is
//! reported on stderr and skipped; later writes still go through. Call
//! `finish()` to flush so late IO errors surface instead of being dropped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::segment::is_chapter_heading;
use crate::stats::ChapterStats;
use crate::Result;

/// Writes one tab-separated row per chapter.
///
/// Fields: two-digit book number, two-digit chapter number, word count,
/// character count, verse count. No header row.
pub struct SummaryWriter {
    out: BufWriter<File>,
}

impl SummaryWriter {
    /// Create the summary file, truncating any previous contents.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            out: BufWriter::new(File::create(path)?),
        })
    }

    /// Append one chapter's row. A failed write is reported and skipped.
    pub fn write_row(&mut self, stats: &ChapterStats) {
        let row = format!(
            "{:02}\t{:02}\t{}\t{}\t{}",
            stats.book, stats.chapter, stats.words, stats.characters, stats.verses
        );
        if let Err(err) = writeln!(self.out, "{row}") {
            eprintln!(
                "failed to append summary row for book {:02} chapter {:02}: {err}",
                stats.book, stats.chapter
            );
        }
    }

    /// Flush the stream.
    pub fn finish(mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Concatenates every book's cleaned lines into one document.
///
/// A blank line precedes each chapter heading, and two blank lines follow
/// each book. Lines emptied by the loader's character scrub are skipped.
pub struct CombinedWriter {
    out: BufWriter<File>,
}

impl CombinedWriter {
    /// Create the combined file, truncating any previous contents.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            out: BufWriter::new(File::create(path)?),
        })
    }

    /// Append one book's cleaned lines, with chapter and book separators.
    pub fn append_book(&mut self, lines: &[String]) {
        for line in lines {
            if line.is_empty() {
                continue;
            }
            if is_chapter_heading(line) {
                self.emit("");
            }
            self.emit(line);
        }
        self.emit("");
        self.emit("");
    }

    /// Write one line; a failed write is reported and skipped.
    fn emit(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}") {
            eprintln!("failed to append combined line: {err}");
        }
    }

    /// Flush the stream.
    pub fn finish(mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
