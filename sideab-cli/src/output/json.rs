//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs segments as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    segments: Vec<SegmentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SegmentData {
    /// The segment text, untrimmed
    pub text: String,
    /// Starting byte offset in its text block
    pub offset: usize,
    /// Length of the segment in bytes
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            segments: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_segment(&mut self, segment: &str, offset: usize) -> Result<()> {
        self.segments.push(SegmentData {
            text: segment.to_string(),
            offset,
            length: segment.len(),
        });
        Ok(())
    }

    fn format_separator(&mut self) -> Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.segments)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.segments)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::write_block;

    #[test]
    fn test_json_offsets() {
        let mut buf = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buf, false);
            write_block(&mut formatter, "A。B").unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<SegmentData> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            parsed,
            vec![
                SegmentData {
                    text: "A。".to_string(),
                    offset: 0,
                    length: 4,
                },
                SegmentData {
                    text: "B".to_string(),
                    offset: 4,
                    length: 1,
                },
            ]
        );
    }

    #[test]
    fn test_empty_json_array() {
        let mut buf = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buf, true);
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }
}
