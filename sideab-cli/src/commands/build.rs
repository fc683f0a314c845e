//! Build command implementation

use crate::config::CliConfig;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use sideab_site::{BuildReport, Page, SiteBuilder};
use std::path::PathBuf;

/// Arguments for the build command
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Content file (default: built-in content)
    #[arg(short, long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Output directory (default: from config, else dist)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Remove the output directory before building
    #[arg(long)]
    pub clean: bool,

    /// Only build these pages (home, life)
    #[arg(short, long, value_name = "PAGE", value_parser = parse_page)]
    pub page: Vec<Page>,

    /// Configuration file
    #[arg(long, value_name = "FILE", env = "SIDEAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_page(name: &str) -> Result<Page, String> {
    Page::from_name(name).ok_or_else(|| format!("unknown page `{name}` (expected home or life)"))
}

impl BuildArgs {
    /// Execute the build command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let content_path = self.content.as_deref().or(config.build.content.as_deref());
        let content = super::load_content(content_path)?;

        let mut builder = SiteBuilder::new(self.output_dir(&config))
            .clean(self.clean || config.build.clean);
        if !self.page.is_empty() {
            builder = builder.pages(self.page.iter().copied());
        }

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_pages(builder.page_count() as u64);

        let report = builder
            .build_with(&content, |output| progress.page_completed(output.page.name()))
            .with_context(|| format!("Failed to build site into {}", builder.output_dir().display()))?;
        progress.finish();

        if !self.quiet {
            print!("{}", summary(&report, &builder));
        }
        Ok(())
    }

    fn output_dir(&self, config: &CliConfig) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| config.build.output_dir.clone())
    }
}

fn summary(report: &BuildReport, builder: &SiteBuilder) -> String {
    let mut out = format!(
        "Built {} page(s) into {} ({} bytes)\n",
        report.pages.len(),
        builder.output_dir().display(),
        report.total_bytes()
    );
    for page in &report.pages {
        out.push_str(&format!("  {} -> {}\n", page.page, page.path.display()));
    }
    if !report.issues.is_empty() {
        out.push_str(&format!(
            "{} content issue(s), affected items left out; run `sideab validate` for details\n",
            report.issues.len()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(output: PathBuf) -> BuildArgs {
        BuildArgs {
            content: None,
            output: Some(output),
            clean: false,
            page: Vec::new(),
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_build_builtin_site() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("site");
        args(out.clone()).execute().unwrap();

        assert!(out.join("index.html").is_file());
        assert!(out.join("life/index.html").is_file());
        assert!(out.join("style.css").is_file());
    }

    #[test]
    fn test_build_single_page() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("site");
        let mut args = args(out.clone());
        args.page = vec![Page::Life];
        args.execute().unwrap();

        assert!(!out.join("index.html").exists());
        assert!(out.join("life/index.html").is_file());
    }

    #[test]
    fn test_build_missing_content_file() {
        let dir = TempDir::new().unwrap();
        let mut args = args(dir.path().join("site"));
        args.content = Some(dir.path().join("missing.toml"));
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_summary_reports_issues() {
        let dir = TempDir::new().unwrap();
        let builder = SiteBuilder::new(dir.path());
        let mut content = sideab_core::SiteContent::builtin().unwrap();
        content.nav[0].href = "about".to_string();
        let report = builder.build(&content).unwrap();

        let text = summary(&report, &builder);
        assert!(text.contains("1 content issue(s), affected items left out"));
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page("life"), Ok(Page::Life));
        assert!(parse_page("blog").is_err());
    }

    #[test]
    fn test_summary_lists_pages() {
        let dir = TempDir::new().unwrap();
        let builder = SiteBuilder::new(dir.path());
        let content = sideab_core::SiteContent::builtin().unwrap();
        let report = builder.build(&content).unwrap();

        let text = summary(&report, &builder);
        assert!(text.starts_with("Built 2 page(s)"));
        assert!(text.contains("index.html"));
    }
}
