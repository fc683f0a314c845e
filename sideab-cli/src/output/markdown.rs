//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs segments as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    segment_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segment_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_segment(&mut self, segment: &str, _offset: usize) -> Result<()> {
        let text = segment.trim();
        if text.is_empty() {
            return Ok(());
        }

        self.segment_count += 1;
        writeln!(self.writer, "{}. {}", self.segment_count, text)?;
        Ok(())
    }

    fn format_separator(&mut self) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total segments: {}*", self.segment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
