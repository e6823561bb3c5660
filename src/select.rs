//! Choosing the physical line a word belongs to.
//!
//! An inscription's interpretive words are matched against every physical
//! line in reading order; the line with the most compact match wins. The
//! aligner itself is stateless - the sequential-progress hint used when
//! driving a whole inscription is explicit caller state ([`SelectionCursor`]),
//! never module state.

use serde::{Deserialize, Serialize};

use crate::align::{find_best_span, MatchSpan};

/// The best match for a word across the lines of one inscription.
///
/// `span` is `None` when no line contained the word's letters in order; in
/// that case `line_index` is 0 and `score` is `0.0` so callers can still
/// render the first line unhighlighted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    /// Index of the chosen line within the inscription's line sequence.
    pub line_index: usize,
    /// The matched window within that line, or `None` for no match.
    pub span: Option<MatchSpan>,
    /// Compactness score of the match; `0.0` when `span` is `None`.
    pub score: f64,
}

impl ScoredMatch {
    fn no_match() -> Self {
        Self {
            line_index: 0,
            span: None,
            score: 0.0,
        }
    }
}

/// Run the aligner against every line and keep the best-scoring match.
///
/// Returns `None` only when `lines` itself is empty - distinct from "no
/// match in a line that exists", which yields `Some` with a `None` span.
/// Comparison is strictly-greater, so when scores tie the lowest line index
/// wins, matching the left-to-right reading order of multi-line
/// inscriptions.
pub fn find_best_line<S: AsRef<str>>(lines: &[S], word: &str) -> Option<ScoredMatch> {
    if lines.is_empty() {
        return None;
    }

    let word_len = word.chars().count();
    let mut best = ScoredMatch::no_match();

    for (line_index, line) in lines.iter().enumerate() {
        if let Some(span) = find_best_span(line.as_ref(), word) {
            let score = span.score(word_len);
            if score > best.score {
                best = ScoredMatch {
                    line_index,
                    span: Some(span),
                    score,
                };
            }
        }
    }

    Some(best)
}

/// Caller-owned progress hint for sequential word-to-line assignment.
///
/// Annotation proceeds word by word through an inscription, and the chosen
/// line index normally never moves backwards. Callers driving a whole word
/// list can hold one of these and advance it with each selection; it is an
/// optimization/progress marker only and has no effect on correctness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    line_index: usize,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The highest line index selected so far.
    pub fn line_index(&self) -> usize {
        self.line_index
    }

    /// Move the cursor forward to `line_index`; backwards moves are ignored.
    pub fn advance_to(&mut self, line_index: usize) {
        if line_index >= self.line_index {
            self.line_index = line_index;
        }
    }
}
