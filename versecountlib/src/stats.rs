//! Word, character, and verse statistics.
//!
//! Lines are tokenized on single spaces with no collapsing: consecutive
//! spaces yield empty tokens, which count as words of length zero. When the
//! first token parses as an integer it is a verse number and is excluded from
//! both counts. Heading lines ("Chapter 3") start with a non-numeric token, so
//! their own tokens are counted like any verse's.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use crate::segment::Chapter;

/// Number of words in a line, excluding a leading verse number.
pub fn line_word_count(line: &str) -> u64 {
    let tokens: Vec<&str> = line.trim().split(' ').collect();
    let skip = usize::from(has_verse_number(&tokens));
    (tokens.len() - skip) as u64
}

/// Sum of token lengths in a line, excluding a leading verse number.
///
/// Inter-token spaces never count.
pub fn line_char_count(line: &str) -> u64 {
    let tokens: Vec<&str> = line.trim().split(' ').collect();
    let skip = usize::from(has_verse_number(&tokens));
    tokens[skip..]
        .iter()
        .map(|token| token.chars().count() as u64)
        .sum()
}

fn has_verse_number(tokens: &[&str]) -> bool {
    tokens
        .first()
        .is_some_and(|token| token.parse::<i32>().is_ok())
}

/// Derived statistics for one chapter of one book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterStats {
    /// 1-based book number
    pub book: u32,
    /// 1-based chapter number within the book
    pub chapter: u32,
    /// Word count across all lines, heading included
    pub words: u64,
    /// Character count across all lines, heading included
    pub characters: u64,
    /// Verse count: line count minus the heading
    pub verses: u64,
}

impl ChapterStats {
    /// Measure a chapter's statistics.
    pub fn measure(book: u32, number: u32, chapter: &Chapter) -> Self {
        let mut words = 0;
        let mut characters = 0;
        for line in &chapter.lines {
            words += line_word_count(line);
            characters += line_char_count(line);
        }
        Self {
            book,
            chapter: number,
            words,
            characters,
            verses: chapter.verse_count(),
        }
    }
}

/// Running word and character totals across the whole corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusTotals {
    /// Total word count
    pub words: u64,
    /// Total character count
    pub characters: u64,
}

impl CorpusTotals {
    /// Create new zeroed totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one chapter's counts into the totals.
    pub fn absorb(&mut self, stats: &ChapterStats) {
        self.words += stats.words;
        self.characters += stats.characters;
    }
}

impl AddAssign for CorpusTotals {
    fn add_assign(&mut self, other: Self) {
        self.words += other.words;
        self.characters += other.characters;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_strips_verse_number() {
        assert_eq!(line_word_count("1 In the beginning"), 3);
        assert_eq!(line_word_count("In the beginning"), 3);
    }

    #[test]
    fn test_char_count_strips_verse_number() {
        // "In" + "the" + "beginning" = 2 + 3 + 9
        assert_eq!(line_char_count("1 In the beginning"), 14);
        assert_eq!(line_char_count("In the beginning"), 14);
    }

    #[test]
    fn test_heading_line_counts_its_own_tokens() {
        // "Chapter" is non-numeric, so nothing is stripped.
        assert_eq!(line_word_count("Chapter 3"), 2);
        assert_eq!(line_char_count("Chapter 3"), 8);
    }

    #[test]
    fn test_consecutive_spaces_yield_empty_tokens() {
        assert_eq!(line_word_count("In  the"), 3);
        assert_eq!(line_char_count("In  the"), 5);
    }

    #[test]
    fn test_lone_verse_number_counts_zero() {
        assert_eq!(line_word_count("1"), 0);
        assert_eq!(line_char_count("1"), 0);
    }

    #[test]
    fn test_empty_line_is_one_empty_word() {
        assert_eq!(line_word_count(""), 1);
        assert_eq!(line_char_count(""), 0);
    }

    #[test]
    fn test_measure_chapter() {
        let chapter = Chapter {
            lines: vec![
                "Chapter 1".to_string(),
                "1 In the beginning".to_string(),
                "2 And the earth".to_string(),
            ],
        };
        let stats = ChapterStats::measure(1, 1, &chapter);

        assert_eq!(stats.book, 1);
        assert_eq!(stats.chapter, 1);
        assert_eq!(stats.words, 2 + 3 + 3);
        assert_eq!(stats.characters, 8 + 14 + 11);
        assert_eq!(stats.verses, 2);
    }

    #[test]
    fn test_measure_sums_match_per_line_counts() {
        let chapter = Chapter {
            lines: vec![
                "Psalm 23".to_string(),
                "1 The LORD is my shepherd".to_string(),
            ],
        };
        let stats = ChapterStats::measure(19, 23, &chapter);

        let words: u64 = chapter.lines.iter().map(|l| line_word_count(l)).sum();
        let characters: u64 = chapter.lines.iter().map(|l| line_char_count(l)).sum();
        assert_eq!(stats.words, words);
        assert_eq!(stats.characters, characters);
        assert_eq!(stats.verses, chapter.lines.len() as u64 - 1);
    }

    #[test]
    fn test_totals_absorb() {
        let mut totals = CorpusTotals::new();
        totals.absorb(&ChapterStats {
            book: 1,
            chapter: 1,
            words: 10,
            characters: 40,
            verses: 2,
        });
        totals.absorb(&ChapterStats {
            book: 1,
            chapter: 2,
            words: 5,
            characters: 20,
            verses: 1,
        });

        assert_eq!(totals.words, 15);
        assert_eq!(totals.characters, 60);
    }

    #[test]
    fn test_totals_add_assign() {
        let mut a = CorpusTotals {
            words: 3,
            characters: 12,
        };
        a += CorpusTotals {
            words: 2,
            characters: 9,
        };
        assert_eq!(a.words, 5);
        assert_eq!(a.characters, 21);
    }
}
