//! Validate command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use sideab_core::ContentIssue;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Content file to validate (default: built-in content)
    #[arg(short, long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Fail when any issue is found
    #[arg(long)]
    pub strict: bool,

    /// Configuration file
    #[arg(long, value_name = "FILE", env = "SIDEAB_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(0, false);

        let config = CliConfig::load(self.config.as_deref())?;
        let path = self.content.as_deref().or(config.build.content.as_deref());
        match path {
            Some(path) => println!("Validating content: {}", path.display()),
            None => println!("Validating built-in content"),
        }

        let content = super::load_content(path)?;
        let issues = content.validate();
        print!("{}", report(&issues));

        if self.strict && !issues.is_empty() {
            return Err(CliError::ContentIssues(issues.len()).into());
        }
        Ok(())
    }
}

fn report(issues: &[ContentIssue]) -> String {
    if issues.is_empty() {
        return "✓ Content is valid!\n".to_string();
    }

    let mut out = format!("✗ Found {} issue(s):\n", issues.len());
    for issue in issues {
        out.push_str(&format!("  - {issue}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn content_without_article_images() -> String {
        let mut content = sideab_core::SiteContent::builtin().unwrap();
        for entry in &mut content.blog {
            entry.image = None;
        }
        toml::to_string(&content).unwrap()
    }

    fn args(content: Option<PathBuf>, strict: bool) -> ValidateArgs {
        ValidateArgs {
            content,
            strict,
            config: None,
        }
    }

    #[test]
    fn test_validate_args_debug() {
        let args = args(Some(PathBuf::from("content.toml")), true);
        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("content.toml"));
    }

    #[test]
    fn test_validate_builtin_content() {
        assert!(args(None, true).execute().is_ok());
    }

    #[test]
    fn test_issues_are_warnings_unless_strict() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content_without_article_images()).unwrap();
        let path = temp_file.path().to_path_buf();

        assert!(args(Some(path.clone()), false).execute().is_ok());

        let err = args(Some(path), true).execute().unwrap_err();
        assert!(err.to_string().contains("1 issue"));
    }

    #[test]
    fn test_unparsable_content_fails() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[meta\ntitle = ").unwrap();

        let args = args(Some(temp_file.path().to_path_buf()), false);
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_report_lists_issues() {
        let issues = vec![ContentIssue::ArticleWithoutImage {
            id: "broken".to_string(),
        }];
        let text = report(&issues);
        assert!(text.starts_with("✗ Found 1 issue(s)"));
        assert!(text.contains("broken"));
        assert_eq!(report(&[]), "✓ Content is valid!\n");
    }
}
