//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const PAGE_TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} pages {msg}";

/// Progress reporter for page builds
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the progress bar for `total_pages` pages
    pub fn init_pages(&mut self, total_pages: u64) {
        if self.quiet {
            return;
        }

        let style = match ProgressStyle::default_bar().template(PAGE_TEMPLATE) {
            Ok(style) => style.progress_chars("##-"),
            Err(e) => {
                log::debug!("Falling back to default progress style: {e}");
                ProgressStyle::default_bar()
            }
        };

        let pb = ProgressBar::new(total_pages);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a written page
    pub fn page_completed(&self, page: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Wrote: {page}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }

    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}
