//! HTML building blocks
//!
//! [`Markup`] is a tiny append-only writer. Text and attribute values passed
//! through it are escaped; [`Markup::raw`] is reserved for trusted fragments
//! coming from the content file.

use sideab_core::segment::{line_breaks, Piece, TERMINATOR};
use std::borrow::Cow;

/// Line break element used between segments
pub const BREAK: &str = "<br />";

/// Escape `& < > " '` for use in text nodes and attribute values
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Escaped segments of `text` with a `<br />` between consecutive ones
///
/// Empty text renders nothing.
pub fn segmented(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + BREAK.len() * 4);
    for piece in line_breaks(Some(text)) {
        match piece {
            Piece::Text(segment) => out.push_str(&escape(segment)),
            Piece::Separator => out.push_str(BREAK),
        }
    }
    out
}

/// Append a `<br />` after every terminator, including the last one
///
/// Used for life page descriptions, which may carry inline HTML and are
/// therefore not escaped.
pub fn break_after_terminators(html: &str) -> String {
    let mut with_break = String::with_capacity(TERMINATOR.len_utf8() + BREAK.len());
    with_break.push(TERMINATOR);
    with_break.push_str(BREAK);
    html.replace(TERMINATOR, &with_break)
}

/// Append-only HTML writer
#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<tag attr="value" ...>`
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs);
        self.buf.push('>');
        self
    }

    /// `<tag attr="value" ... />`
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs);
        self.buf.push_str(" />");
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// Element containing escaped text
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.open(tag, attrs).text(text).close(tag)
    }

    /// Escaped text
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape(text));
        self
    }

    /// Text broken into lines at sentence terminators
    pub fn segmented(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&segmented(text));
        self
    }

    /// Trusted fragment, written as is
    pub fn raw(&mut self, html: &str) -> &mut Self {
        self.buf.push_str(html);
        self
    }

    pub fn br(&mut self) -> &mut Self {
        self.raw(BREAK)
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape(value));
            self.buf.push('"');
        }
    }
}
