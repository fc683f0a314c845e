//! HTML fragment output formatter

use super::OutputFormatter;
use anyhow::Result;
use sideab_site::html::{escape, BREAK};
use std::io::Write;

/// HTML formatter - escaped segments joined by `<br />`, one block per line
pub struct HtmlFormatter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for HtmlFormatter<W> {
    fn format_segment(&mut self, segment: &str, _offset: usize) -> Result<()> {
        write!(self.writer, "{}", escape(segment))?;
        Ok(())
    }

    fn format_separator(&mut self) -> Result<()> {
        write!(self.writer, "{BREAK}")?;
        Ok(())
    }

    fn end_block(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
