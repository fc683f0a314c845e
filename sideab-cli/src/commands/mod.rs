//! CLI command implementations

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Subcommand;
use sideab_core::SiteContent;
use sideab_site::Page;
use std::path::Path;

pub mod build;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the static site
    Build(build::BuildArgs),

    /// Split Japanese text into sentence segments
    Segment(segment::SegmentArgs),

    /// Check a content file for malformed items
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the pages the site consists of
    Pages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Build(args) => args.execute(),
            Commands::Segment(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Text printed by `sideab list`
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Pages => {
                out.push_str("Pages:\n");
                for page in Page::ALL {
                    out.push_str(&format!(
                        "  {:<6} {:<6} {:<16} {}\n",
                        page.name(),
                        page.route(),
                        page.output_path().display(),
                        page.side_label()
                    ));
                }
            }
            ListCommands::Formats => {
                out.push_str("Output formats:\n");
                for format in segment::OutputFormat::ALL {
                    out.push_str(&format!("  {:<9} {}\n", format.name(), format.summary()));
                }
            }
        }
        out
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Already initialized when several commands run in one process.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Load site content from `path`, or the built-in content
pub(crate) fn load_content(path: Option<&Path>) -> Result<SiteContent> {
    match path {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            log::info!("Loading content from {}", path.display());
            SiteContent::from_file(path)
                .with_context(|| format!("Failed to load content: {}", path.display()))
        }
        None => {
            log::info!("Using built-in content");
            SiteContent::builtin().context("Failed to load built-in content")
        }
    }
}
