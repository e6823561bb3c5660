//! Inscription container and the whole-inscription alignment driver.
//!
//! An inscription arrives from the surrounding tooling as two parallel
//! texts: the raw diplomatic transcription, with physical line breaks
//! marked by a delimiter character, and the cleaned interpretive
//! transcription, word-segmented by whitespace. This module holds both and
//! drives the aligner over every word, producing one [`WordAlignment`] row
//! per word for the spreadsheet-assembly collaborator to render.
//!
//! Physical lines are kept exactly as split - never trimmed, filtered, or
//! reordered - because spans index into them and reading order is
//! significant.

use serde::{Deserialize, Serialize};

use crate::align::MatchSpan;
use crate::highlight::{highlight, HighlightedLine};
use crate::select::{find_best_line, ScoredMatch, SelectionCursor};

/// The character separating physical lines in raw diplomatic text.
pub const LINE_DELIMITER: char = '/';

/// One inscription: raw physical lines plus interpretive words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inscription {
    lines: Vec<String>,
    words: Vec<String>,
}

/// The alignment of one interpretive word: the chosen physical line, the
/// matched window (if any), and the line segmented for mixed-emphasis
/// rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordAlignment {
    pub word: String,
    pub line_index: usize,
    pub span: Option<MatchSpan>,
    pub score: f64,
    pub highlighted: HighlightedLine,
}

impl Inscription {
    /// Build an inscription, splitting the raw text on [`LINE_DELIMITER`]
    /// and the interpretive text on whitespace.
    pub fn new(raw_text: &str, interpretive_text: &str) -> Self {
        Self::with_delimiter(raw_text, interpretive_text, LINE_DELIMITER)
    }

    /// As [`new`](Self::new), with an explicit line delimiter.
    ///
    /// Splitting always yields at least one line, even for empty raw text.
    pub fn with_delimiter(raw_text: &str, interpretive_text: &str, delimiter: char) -> Self {
        Self {
            lines: raw_text.split(delimiter).map(str::to_string).collect(),
            words: interpretive_text
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn get_line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Align every interpretive word against the physical lines, in order.
    ///
    /// A cursor tracks annotation progress through the lines, advancing
    /// whenever the chosen line index moves forward; selection itself is
    /// stateless and each word is matched independently. Words with no
    /// match anywhere get line 0, no span, and an unhighlighted line.
    pub fn align_words(&self) -> Vec<WordAlignment> {
        let mut cursor = SelectionCursor::new();
        self.words
            .iter()
            .map(|word| {
                let chosen = find_best_line(&self.lines, word).unwrap_or(ScoredMatch {
                    line_index: 0,
                    span: None,
                    score: 0.0,
                });
                cursor.advance_to(chosen.line_index);

                let line = self.get_line(chosen.line_index).unwrap_or("");
                WordAlignment {
                    word: word.clone(),
                    line_index: chosen.line_index,
                    span: chosen.span,
                    score: chosen.score,
                    highlighted: highlight(line, chosen.span),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_raw_text_on_the_delimiter() {
        let ins = Inscription::new("dis manibus / sacrum", "dis manibus sacrum");
        assert_eq!(ins.line_count(), 2);
        assert_eq!(ins.get_line(0), Some("dis manibus "));
        assert_eq!(ins.get_line(1), Some(" sacrum"));
        assert_eq!(ins.get_line(2), None);
    }

    #[test]
    fn lines_are_never_trimmed_or_filtered() {
        let ins = Inscription::new("a // b", "a b");
        assert_eq!(ins.lines(), &["a ", "", " b"]);
    }

    #[test]
    fn empty_raw_text_still_has_one_line() {
        let ins = Inscription::new("", "dis");
        assert_eq!(ins.line_count(), 1);
        assert_eq!(ins.get_line(0), Some(""));
    }

    #[test]
    fn interpretive_text_splits_on_whitespace() {
        let ins = Inscription::new("x", "dis  manibus\tsacrum");
        assert_eq!(ins.words(), &["dis", "manibus", "sacrum"]);
    }

    #[test]
    fn custom_delimiter() {
        let ins = Inscription::with_delimiter("a|b", "a b", '|');
        assert_eq!(ins.lines(), &["a", "b"]);
    }

    #[test]
    fn align_words_produces_one_row_per_word() {
        let ins = Inscription::new("dis manib[us] / hic sita est", "dis manibus hic sita est");
        let rows = ins.align_words();
        assert_eq!(rows.len(), 5);

        assert_eq!(rows[0].word, "dis");
        assert_eq!(rows[0].line_index, 0);
        assert_eq!(rows[0].score, 1.0);

        assert_eq!(rows[1].word, "manibus");
        assert_eq!(rows[1].line_index, 0);
        assert_eq!(rows[1].span, Some(MatchSpan::new(4, 12)));

        assert_eq!(rows[2].line_index, 1);
        assert_eq!(rows[3].line_index, 1);
        assert_eq!(rows[4].line_index, 1);
    }

    #[test]
    fn unmatched_word_renders_line_zero_without_emphasis() {
        let ins = Inscription::new("dis manibus / sacrum", "xyz");
        let rows = ins.align_words();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line_index, 0);
        assert_eq!(rows[0].span, None);
        assert_eq!(rows[0].score, 0.0);
        assert!(!rows[0].highlighted.has_emphasis());
        assert_eq!(rows[0].highlighted.text(), "dis manibus ");
    }

    #[test]
    fn empty_interpretive_text_aligns_to_nothing() {
        let ins = Inscription::new("dis manibus", "");
        assert!(ins.align_words().is_empty());
    }

    #[test]
    fn highlighted_rows_reconstruct_their_line() {
        let ins = Inscription::new(
            "d m / aureliae restitutae / fil(iae) dulcissimae",
            "dis manibus aureliae restitutae filiae dulcissimae",
        );
        for row in ins.align_words() {
            let line = ins.get_line(row.line_index).unwrap();
            assert_eq!(row.highlighted.text(), line);
        }
    }
}
