//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - segments of a block joined by newlines
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_segment(&mut self, segment: &str, _offset: usize) -> Result<()> {
        write!(self.writer, "{segment}")?;
        Ok(())
    }

    fn format_separator(&mut self) -> Result<()> {
        writeln!(self.writer)?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::write_block;

    #[test]
    fn test_text_output() {
        let mut buf = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buf);
            write_block(&mut formatter, "A。B。").unwrap();
            write_block(&mut formatter, "").unwrap();
            write_block(&mut formatter, "C").unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "A。\nB。\nC\n");
    }
}
