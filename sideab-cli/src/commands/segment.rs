//! Segment command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{
    write_block, HtmlFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter,
};
use anyhow::{Context, Result};
use clap::{ArgGroup, Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "text"])))]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", num_args = 1..)]
    pub input: Vec<String>,

    /// Segment this text instead of reading files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(long, value_name = "FILE", env = "SIDEAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One segment per line
    Text,
    /// JSON array of segments with byte offsets
    Json,
    /// Markdown numbered list
    Markdown,
    /// HTML fragment with `<br />` between segments
    Html,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Html,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text with one segment per line",
            OutputFormat::Json => "JSON array of segments with byte offsets",
            OutputFormat::Markdown => "Numbered Markdown list with a total",
            OutputFormat::Html => "HTML fragment with <br /> after each segment but the last",
        }
    }
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = self.resolve_format(&config)?;
        log::info!("Segmenting as {}", format.name());

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.segment.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
        };

        let mut total = 0;
        if let Some(text) = &self.text {
            total += write_block(formatter.as_mut(), text)?;
        } else {
            for path in resolve_patterns(&self.input)? {
                let text = FileReader::read_text(&path)?;
                let count = write_block(formatter.as_mut(), &text)?;
                log::info!("{}: {count} segments", path.display());
                total += count;
            }
        }
        formatter.finish()?;

        log::info!("Wrote {total} segments");
        Ok(())
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.segment.default_format, true).map_err(|_| {
            anyhow::Error::from(CliError::ConfigError(format!(
                "unknown default_format: {}",
                config.segment.default_format
            )))
        })
    }
}
