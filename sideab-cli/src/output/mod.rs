//! Output formatting module

use anyhow::Result;
use sideab_core::segment::{line_breaks, Piece};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Output a single segment starting at byte `offset` of its text block
    fn format_segment(&mut self, segment: &str, offset: usize) -> Result<()>;

    /// Output the line break between two segments
    fn format_separator(&mut self) -> Result<()>;

    /// Called after the last segment of a text block
    fn end_block(&mut self) -> Result<()> {
        Ok(())
    }

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Feed one text block through a formatter
///
/// Empty blocks produce no output at all.
pub fn write_block(formatter: &mut dyn OutputFormatter, text: &str) -> Result<usize> {
    let mut offset = 0;
    let mut segments = 0;

    for piece in line_breaks(Some(text)) {
        match piece {
            Piece::Text(segment) => {
                formatter.format_segment(segment, offset)?;
                offset += segment.len();
                segments += 1;
            }
            Piece::Separator => formatter.format_separator()?,
        }
    }

    if segments > 0 {
        formatter.end_block()?;
    }
    Ok(segments)
}

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
