//! Sentence segmentation on the Japanese full-width period
//!
//! Text is partitioned at `。` (U+3002). Each terminator closes the segment
//! it ends, and whatever follows the last terminator becomes a final
//! segment of its own. Concatenating the segments always yields the input.
//!
//! Rendering is left to the caller: [`line_breaks`] yields [`Piece`]s with a
//! [`Piece::Separator`] between consecutive segments, which the presentation
//! layer folds into plain text, HTML or anything else.
//!
//! ```rust
//! use sideab_core::segment::{line_breaks, Piece};
//!
//! let pieces: Vec<_> = line_breaks(Some("A。B")).collect();
//! assert_eq!(pieces, vec![Piece::Text("A。"), Piece::Separator, Piece::Text("B")]);
//! ```

use std::iter::{FusedIterator, Peekable};

/// Sentence terminator (IDEOGRAPHIC FULL STOP)
pub const TERMINATOR: char = '。';

/// Iterator over the segments of a text block
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let end = match self.rest.find(TERMINATOR) {
            Some(pos) => pos + TERMINATOR.len_utf8(),
            None => self.rest.len(),
        };

        let (segment, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            (0, Some(0))
        } else {
            // At least the trailing segment, at most one per byte.
            (1, Some(self.rest.len()))
        }
    }
}

impl FusedIterator for Segments<'_> {}

/// Split `text` into segments
///
/// Empty input yields no segments.
pub fn segments(text: &str) -> Segments<'_> {
    Segments { rest: text }
}

/// Collect the segments of `text`
pub fn split_sentences(text: &str) -> Vec<&str> {
    segments(text).collect()
}

/// One element of a rendered text block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece<'a> {
    /// Literal segment text
    Text(&'a str),
    /// Line break between two segments
    Separator,
}

impl<'a> Piece<'a> {
    /// Returns true for [`Piece::Separator`]
    pub fn is_separator(&self) -> bool {
        matches!(self, Piece::Separator)
    }

    /// Segment text, if this is a text piece
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            Piece::Text(text) => Some(text),
            Piece::Separator => None,
        }
    }
}

/// Iterator of text pieces with separators between consecutive segments
#[derive(Debug, Clone)]
pub struct Pieces<'a> {
    segments: Peekable<Segments<'a>>,
    separator_due: bool,
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.separator_due {
            self.separator_due = false;
            return Some(Piece::Separator);
        }

        let segment = self.segments.next()?;
        self.separator_due = self.segments.peek().is_some();
        Some(Piece::Text(segment))
    }
}

impl FusedIterator for Pieces<'_> {}

/// Render a possibly absent text block as segments separated by line breaks
///
/// `None` and `Some("")` both produce an empty sequence.
pub fn line_breaks(text: Option<&str>) -> Pieces<'_> {
    Pieces {
        segments: segments(text.unwrap_or_default()).peekable(),
        separator_due: false,
    }
}

/// Fold the pieces of `text` into a string, writing `separator` for each break
pub fn render_with(text: &str, separator: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for piece in line_breaks(Some(text)) {
        match piece {
            Piece::Text(segment) => out.push_str(segment),
            Piece::Separator => out.push_str(separator),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(pieces: &[Piece<'a>]) -> Vec<&'a str> {
        pieces.iter().filter_map(Piece::text).collect()
    }

    fn separator_count(pieces: &[Piece<'_>]) -> usize {
        pieces.iter().filter(|p| p.is_separator()).count()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(line_breaks(Some("")).count(), 0);
        assert_eq!(line_breaks(None).count(), 0);
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_no_terminator() {
        let pieces: Vec<_> = line_breaks(Some("hello world")).collect();
        assert_eq!(pieces, vec![Piece::Text("hello world")]);
    }

    #[test]
    fn test_single_trailing_terminator() {
        let pieces: Vec<_> = line_breaks(Some("A。")).collect();
        assert_eq!(pieces, vec![Piece::Text("A。")]);
    }

    #[test]
    fn test_two_sentences() {
        let pieces: Vec<_> = line_breaks(Some("A。B。")).collect();
        assert_eq!(
            pieces,
            vec![Piece::Text("A。"), Piece::Separator, Piece::Text("B。")]
        );
    }

    #[test]
    fn test_trailing_remainder() {
        let pieces: Vec<_> = line_breaks(Some("A。B")).collect();
        assert_eq!(texts(&pieces), vec!["A。", "B"]);
        assert_eq!(separator_count(&pieces), 1);
    }

    #[test]
    fn test_consecutive_terminators() {
        let pieces: Vec<_> = line_breaks(Some("A。。B")).collect();
        assert_eq!(texts(&pieces), vec!["A。", "。", "B"]);
        assert_eq!(separator_count(&pieces), 2);
    }

    #[test]
    fn test_only_terminators() {
        assert_eq!(split_sentences("。。。"), vec!["。", "。", "。"]);
    }

    #[test]
    fn test_whitespace_is_kept() {
        // Leading and trailing spaces stay inside their segments
        assert_eq!(split_sentences(" A。 B "), vec![" A。", " B "]);
    }

    #[test]
    fn test_mixed_script_sentence() {
        let text = "いろいろ聴きますが、とくにJTNC (Jazz the New Chapter)系が好きです。";
        assert_eq!(split_sentences(text), vec![text]);
    }

    #[test]
    fn test_never_starts_or_ends_with_separator() {
        let pieces: Vec<_> = line_breaks(Some("一。二。三")).collect();
        assert!(!pieces.first().unwrap().is_separator());
        assert!(!pieces.last().unwrap().is_separator());
    }

    #[test]
    fn test_render_with_newline() {
        let rendered = render_with("気がつけば割と多趣味なのかも、と思います。主だったものの紹介です。", "\n");
        assert_eq!(
            rendered,
            "気がつけば割と多趣味なのかも、と思います。\n主だったものの紹介です。"
        );
    }

    #[test]
    fn test_iterators_are_fused() {
        let mut iter = segments("A");
        assert_eq!(iter.next(), Some("A"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        let mut pieces = line_breaks(Some("A"));
        assert!(pieces.next().is_some());
        assert!(pieces.next().is_none());
        assert!(pieces.next().is_none());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let text = "A。B。C";
        let first: Vec<_> = line_breaks(Some(text)).collect();
        let second: Vec<_> = line_breaks(Some(text)).collect();
        assert_eq!(first, second);
    }
}
