//! Character alignment between cleaned and raw epigraphic text.
//!
//! Annotation workflows over Latin inscriptions work from two parallel
//! transcriptions: the raw diplomatic text, full of editorial notation
//! (restoration brackets, expansion parentheses, uncertainty marks,
//! numerals, `/` line breaks), and the cleaned, word-segmented
//! interpretive text the annotator actually tags. This crate locates, for
//! each interpretive word, the best-matching contiguous span of raw
//! characters and the physical line it belongs to, so the annotator can
//! see per word which source characters it corresponds to.
//!
//! ## Core Types
//!
//! - [`MatchSpan`] - char-offset window of a match within one line
//! - [`ScoredMatch`] - best match across an inscription's lines
//! - [`HighlightedLine`] - prefix / matched / suffix segmentation
//! - [`Inscription`] - raw lines + interpretive words, with a
//!   whole-inscription driver
//!
//! ## Example
//!
//! ```
//! use epigraph_align::{find_best_line, highlight};
//!
//! let lines = ["dis manib[us]", "hic sita est"];
//! let best = find_best_line(&lines, "manibus").unwrap();
//! assert_eq!(best.line_index, 0);
//!
//! let rendered = highlight(lines[best.line_index], best.span);
//! assert_eq!(rendered.text(), "dis manib[us]");
//! assert!(rendered.has_emphasis());
//! ```
//!
//! All operations are pure and total: no match is a first-class result,
//! empty inputs are degenerate but valid, and nothing here does I/O or
//! holds state between calls.

mod align;
mod highlight;
mod inscription;
mod normalize;
mod select;

pub use align::{find_best_span, MatchSpan};
pub use highlight::{highlight, HighlightedLine, Segment};
pub use inscription::{Inscription, WordAlignment, LINE_DELIMITER};
pub use normalize::{fold, fold_char, strip_notation};
pub use select::{find_best_line, ScoredMatch, SelectionCursor};

#[cfg(test)]
mod tests {
    mod alignment;
}
