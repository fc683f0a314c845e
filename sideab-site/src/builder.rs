//! Static output

use crate::error::{Result, SiteError};
use crate::layout::render_page;
use crate::page::Page;
use crate::style::stylesheet;
use sideab_core::{ContentIssue, SiteContent};
use std::fs;
use std::path::{Path, PathBuf};

/// One written page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutput {
    pub page: Page,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Summary of a build
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub pages: Vec<PageOutput>,
    pub stylesheet_bytes: usize,
    /// Malformed items left out of the pages
    pub issues: Vec<ContentIssue>,
}

impl BuildReport {
    pub fn total_bytes(&self) -> usize {
        self.pages.iter().map(|p| p.bytes).sum::<usize>() + self.stylesheet_bytes
    }
}

/// Writes the site into an output directory
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    output_dir: PathBuf,
    clean: bool,
    pages: Vec<Page>,
}

impl SiteBuilder {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            clean: false,
            pages: Page::ALL.to_vec(),
        }
    }

    /// Remove the output directory before writing
    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    /// Restrict the build to the given pages
    ///
    /// Repeated pages are built once, in order of first appearance.
    pub fn pages(mut self, pages: impl IntoIterator<Item = Page>) -> Self {
        self.pages.clear();
        for page in pages {
            if !self.pages.contains(&page) {
                self.pages.push(page);
            }
        }
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn build(&self, content: &SiteContent) -> Result<BuildReport> {
        self.build_with(content, |_| {})
    }

    /// Build, calling `on_page` after each page is written
    pub fn build_with(
        &self,
        content: &SiteContent,
        mut on_page: impl FnMut(&PageOutput),
    ) -> Result<BuildReport> {
        let issues = content.validate();
        for issue in &issues {
            tracing::warn!("{issue}");
        }

        if self.clean && self.output_dir.exists() {
            tracing::info!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir).map_err(|source| SiteError::Io {
                path: self.output_dir.clone(),
                source,
            })?;
        }

        let mut report = BuildReport {
            issues,
            ..BuildReport::default()
        };

        for &page in &self.pages {
            let html = render_page(page, content);
            let path = self.output_dir.join(page.output_path());
            write_file(&path, &html)?;

            tracing::info!(page = %page, path = %path.display(), bytes = html.len(), "wrote page");
            let output = PageOutput {
                page,
                path,
                bytes: html.len(),
            };
            on_page(&output);
            report.pages.push(output);
        }

        let css = stylesheet(&content.meta.palette);
        write_file(&self.output_dir.join("style.css"), &css)?;
        report.stylesheet_bytes = css.len();

        Ok(report)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let io_error = |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, contents).map_err(io_error)
}
