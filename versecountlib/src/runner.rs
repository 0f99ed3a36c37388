//! The run driver: wires loader, segmenter, counter, and writers.
//!
//! Processes books in reading order, one pass, no state carried between books
//! beyond the running totals and the open output streams.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::corpus::CorpusLayout;
use crate::loader::load_book;
use crate::report::{CombinedWriter, SummaryWriter};
use crate::segment::split_into_chapters;
use crate::stats::{ChapterStats, CorpusTotals};
use crate::Result;

/// Options for a counting run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Where the book files live and how they are named
    pub layout: CorpusLayout,
    /// Target path for the tab-delimited summary
    pub summary_path: PathBuf,
    /// Target path for the combined text (only written when enabled)
    pub combined_path: PathBuf,
    /// Whether to produce the combined text
    pub write_combined: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            layout: CorpusLayout::default(),
            summary_path: PathBuf::from("wordcount.txt"),
            combined_path: PathBuf::from("whole_bible.txt"),
            write_combined: false,
        }
    }
}

impl RunOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the corpus layout.
    pub fn layout(mut self, layout: CorpusLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the summary file path.
    pub fn summary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.summary_path = path.into();
        self
    }

    /// Set the combined text file path.
    pub fn combined_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.combined_path = path.into();
        self
    }

    /// Enable the combined text output.
    pub fn with_combined(mut self) -> Self {
        self.write_combined = true;
        self
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of books processed
    pub books: u32,
    /// Number of chapters across all books (= summary row count)
    pub chapters: u64,
    /// Grand totals across all books
    pub totals: CorpusTotals,
}

/// Run the full pipeline over the corpus.
///
/// The summary file is truncated up front; the combined file only when its
/// flag is set, and is otherwise left untouched. A book that cannot be read
/// or segmented aborts the run: silently skipping one would corrupt the
/// grand totals.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let mut summary = SummaryWriter::create(&options.summary_path)?;
    let mut combined = if options.write_combined {
        Some(CombinedWriter::create(&options.combined_path)?)
    } else {
        None
    };

    let mut totals = CorpusTotals::new();
    let mut chapter_count: u64 = 0;

    for book in options.layout.book_numbers() {
        let path = options.layout.book_path(book);
        let lines = load_book(&path)?;
        if let Some(writer) = combined.as_mut() {
            writer.append_book(&lines);
        }

        let chapters = split_into_chapters(&path, &lines)?;
        for (index, chapter) in chapters.iter().enumerate() {
            let stats = ChapterStats::measure(book, index as u32 + 1, chapter);
            summary.write_row(&stats);
            totals.absorb(&stats);
        }
        chapter_count += chapters.len() as u64;
    }

    summary.finish()?;
    if let Some(writer) = combined {
        writer.finish()?;
    }

    Ok(RunSummary {
        books: options.layout.book_count,
        chapters: chapter_count,
        totals,
    })
}
