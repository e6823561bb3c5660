//! Presentation transform: split a line around a matched span.
//!
//! Purely slicing - no matching logic. The segmented output feeds a
//! mixed-emphasis cell in the annotation spreadsheet, so the concatenation
//! of segments must reproduce the source line byte-for-byte.

use std::fmt;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::align::MatchSpan;

/// One run of text, either emphasized (part of the match) or plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

/// An ordered segmentation of one line; concatenating the segments yields
/// the original line exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedLine {
    segments: Vec<Segment>,
}

impl HighlightedLine {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Reassemble the full line text.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Returns true when some segment is emphasized.
    pub fn has_emphasis(&self) -> bool {
        self.segments.iter().any(|s| s.emphasized)
    }
}

/// Split `line` into prefix / matched / suffix segments around `span`,
/// omitting empty segments. A `None` span produces the whole line as a
/// single plain segment.
///
/// `span` offsets are char offsets as produced by the aligner; offsets past
/// the end of the line are clamped rather than panicking.
pub fn highlight(line: &str, span: Option<MatchSpan>) -> HighlightedLine {
    let mut segments = Vec::new();
    let mut push = |text: &str, emphasized: bool| {
        if !text.is_empty() {
            segments.push(Segment {
                text: text.to_string(),
                emphasized,
            });
        }
    };

    match span {
        None => push(line, false),
        Some(span) => {
            let start = byte_offset(line, span.start);
            let end = byte_offset(line, span.end.max(span.start));
            push(&line[..start], false);
            push(&line[start..end], true);
            push(&line[end..], false);
        }
    }

    HighlightedLine { segments }
}

/// Byte offset of the char at `char_idx`, clamped to the end of the string.
fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

// dis manib[us]
//     ╰──────╯
impl fmt::Display for HighlightedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }

        if !self.has_emphasis() {
            return Ok(());
        }

        f.write_char('\n')?;
        let mut pending_spaces = 0;
        for segment in &self.segments {
            let width = UnicodeWidthStr::width(segment.text.as_str());
            if segment.emphasized && width > 0 {
                for _ in 0..pending_spaces {
                    f.write_char(' ')?;
                }
                pending_spaces = 0;

                f.write_char('╰')?;
                for _ in 0..width.saturating_sub(2) {
                    f.write_char('─')?;
                }
                if width > 1 {
                    f.write_char('╯')?;
                }
            } else {
                pending_spaces += width;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::find_best_span;

    fn spans(line: &str, word: &str) -> Option<MatchSpan> {
        find_best_span(line, word)
    }

    #[test]
    fn splits_into_prefix_match_suffix() {
        let hl = highlight("hic sita est", spans("hic sita est", "sita"));
        assert_eq!(
            hl.segments(),
            &[
                Segment {
                    text: "hic ".to_string(),
                    emphasized: false
                },
                Segment {
                    text: "sita".to_string(),
                    emphasized: true
                },
                Segment {
                    text: " est".to_string(),
                    emphasized: false
                },
            ]
        );
    }

    #[test]
    fn match_at_line_start_omits_the_prefix() {
        let hl = highlight("sacrum", Some(MatchSpan::new(0, 6)));
        assert_eq!(hl.segments().len(), 1);
        assert!(hl.segments()[0].emphasized);
    }

    #[test]
    fn sentinel_span_yields_a_single_plain_segment() {
        let hl = highlight("vixit ann[os] LX", None);
        assert_eq!(hl.segments().len(), 1);
        assert!(!hl.has_emphasis());
        assert_eq!(hl.text(), "vixit ann[os] LX");
    }

    #[test]
    fn empty_line_yields_no_segments() {
        let hl = highlight("", None);
        assert!(hl.segments().is_empty());
        assert_eq!(hl.text(), "");
    }

    #[test]
    fn reconstruction_is_exact() {
        let cases = [
            ("dis manib[us]", Some(MatchSpan::new(4, 12))),
            ("hic sita est", Some(MatchSpan::new(4, 8))),
            ("  spaced   out  ", Some(MatchSpan::new(2, 8))),
            ("vixit ann[os] LX", None),
            ("[---]", Some(MatchSpan::new(1, 4))),
        ];
        for (line, span) in cases {
            let hl = highlight(line, span);
            assert_eq!(hl.text(), line, "reconstruction failed for {line:?}");
        }
    }

    #[test]
    fn out_of_range_span_is_clamped() {
        let hl = highlight("dm", Some(MatchSpan::new(0, 99)));
        assert_eq!(hl.text(), "dm");
        assert!(hl.has_emphasis());
    }

    #[test]
    fn display_underlines_the_matched_window() {
        let hl = highlight("dis manib[us]", spans("dis manib[us]", "manibus"));
        insta::assert_snapshot!(hl, @r###"
        dis manib[us]
            ╰──────╯
        "###);
    }

    #[test]
    fn display_of_single_char_match_uses_a_lone_corner() {
        let hl = highlight("d m s", Some(MatchSpan::new(2, 3)));
        insta::assert_snapshot!(hl, @r###"
        d m s
          ╰
        "###);
    }

    #[test]
    fn display_without_emphasis_is_just_the_text() {
        let hl = highlight("vixit ann[os] LX", None);
        insta::assert_snapshot!(hl, @"vixit ann[os] LX");
    }
}
