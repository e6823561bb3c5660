//! Noise-tolerant span matching of a cleaned word against one raw line.
//!
//! Raw inscription lines interleave real letters with editorial notation.
//! The aligner locates a cleaned word as an in-order letter subsequence of
//! the line, skipping over non-alphabetic characters, and scores each
//! candidate window by compactness so the literal occurrence beats a
//! spurious interleaving.

use serde::{Deserialize, Serialize};

use crate::normalize::fold_char;

/// A half-open `[start, end)` range of char offsets into one line.
///
/// Offsets always refer to the original, unmodified line text, so a span can
/// be used to slice the line for highlighting. Invariant for spans produced
/// by [`find_best_span`]: `start < end <= line_char_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of chars covered by the window.
    pub fn width(&self) -> usize {
        self.end - self.start
    }

    /// Compactness score for a word of `word_len` chars matched inside this
    /// window: `word_len / width`.
    ///
    /// Always in `(0, 1]` for a real match; exactly `1.0` only when the
    /// matched letters are contiguous with no skipped notation between them.
    pub fn score(&self, word_len: usize) -> f64 {
        word_len as f64 / self.width() as f64
    }
}

/// Find the best-matching contiguous window for `word` within `line`.
///
/// Both sides are case-folded for comparison; returned offsets index the
/// original line. From every start offset a forward walk consumes line
/// chars: a char equal to the next expected word char advances the word
/// pointer, a non-alphabetic char is skipped as notation noise, and an
/// alphabetic mismatch abandons the walk. Each completed walk yields a
/// window scored by compactness; the strictly best window wins and ties
/// keep the first-found (leftmost) start offset.
///
/// Returns `None` when the word's letters never appear in order anywhere in
/// the line, and for an empty word or empty line. Quadratic in line length,
/// which is fine for the short physical lines this is used on.
pub fn find_best_span(line: &str, word: &str) -> Option<MatchSpan> {
    let line_folded: Vec<char> = line.chars().map(fold_char).collect();
    let word_folded: Vec<char> = word.chars().map(fold_char).collect();

    if line_folded.is_empty() || word_folded.is_empty() {
        return None;
    }

    let mut best: Option<MatchSpan> = None;
    let mut best_score = 0.0_f64;

    for start in 0..line_folded.len() {
        let mut word_idx = 0;
        let mut end = start;

        while end < line_folded.len() && word_idx < word_folded.len() {
            let c = line_folded[end];
            if c == word_folded[word_idx] {
                word_idx += 1;
            } else if !c.is_alphabetic() {
                // notation noise: move forward in the line only
            } else {
                // a letter that doesn't match the expected next char
                break;
            }
            end += 1;
        }

        if word_idx == word_folded.len() {
            let span = MatchSpan::new(start, end);
            let score = span.score(word_folded.len());
            if score > best_score {
                best_score = score;
                best = Some(span);
            }
        }
    }

    best
}
