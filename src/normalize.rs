//! Case folding and notation stripping for comparison purposes.
//!
//! Raw diplomatic transcriptions interleave letters with editorial notation:
//! restoration brackets `[..]`, expansion parentheses `(..)`, uncertainty
//! marks `?`, numerals, and `/` line breaks. The helpers here produce
//! comparison-only forms of a text. The aligner itself never strips a line
//! before matching - it skips noise in place so that the offsets it returns
//! remain valid into the original text.

/// Fold a single character for case-insensitive comparison.
///
/// Takes the first character of the Unicode lowercase mapping. For the Latin
/// inscription material this crate targets, the mapping is always one-to-one.
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Lowercase an entire text for comparison.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Returns true for characters removed by [`strip_notation`]: the editorial
/// notation set plus digits and whitespace.
fn is_notation(c: char) -> bool {
    matches!(c, '[' | ']' | '(' | ')' | '?' | '/') || c.is_ascii_digit() || c.is_whitespace()
}

/// Remove epigraphic notation, digits, and whitespace, then fold.
///
/// Useful for coarse whole-string comparison between a cleaned word and a raw
/// fragment. Offsets into the result do not correspond to offsets into the
/// input, so this must not be used where a span into the original is needed.
pub fn strip_notation(text: &str) -> String {
    text.chars()
        .filter(|c| !is_notation(*c))
        .map(fold_char)
        .collect()
}
