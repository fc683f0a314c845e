//! Content registries for the site
//!
//! All page content lives in a TOML file. The original site content is
//! embedded at compile time and available through [`SiteContent::builtin`].

mod types;
mod validate;

pub use types::*;
pub use validate::ContentIssue;

use crate::error::{CoreError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Script that upgrades note.com iframes
pub const NOTE_EMBED_SCRIPT_SRC: &str = "https://note.com/scripts/embed.js";

/// Prefix of note.com embed URLs
pub const NOTE_EMBED_URL_PREFIX: &str = "https://note.com/embed/notes/";

/// Iframe height used when an entry does not set one
pub const NOTE_DEFAULT_HEIGHT: u32 = 400;

const BUILTIN_CONTENT: &str = include_str!("../../content/default.toml");

const NOTE_ID_PATTERN: &str = r"^n[0-9a-f]{12}$";

static NOTE_ID: OnceLock<Option<Regex>> = OnceLock::new();

/// Check a note.com article id (`n` followed by 12 hex digits)
///
/// Every id is rejected if the pattern fails to compile.
pub fn is_valid_note_id(id: &str) -> bool {
    NOTE_ID
        .get_or_init(|| {
            Regex::new(NOTE_ID_PATTERN)
                .map_err(|e| tracing::error!(pattern = NOTE_ID_PATTERN, "invalid note id pattern: {e}"))
                .ok()
        })
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(id))
}

/// Every registry the site is rendered from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub meta: SiteMeta,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    pub profile: Profile,
    pub timeline: Timeline,
    #[serde(default)]
    pub about: Vec<AboutSubsection>,
    #[serde(default)]
    pub blog: Vec<BlogEntry>,
    pub life: LifePage,
}

impl SiteContent {
    /// Content shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_CONTENT, "<builtin>")
    }

    /// Parse content from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<string>")
    }

    /// Load content from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let parsed: Self = toml::from_str(content).map_err(|e| CoreError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            origin,
            blog_entries = parsed.blog.len(),
            life_sections = parsed.life.sections.len(),
            "loaded site content"
        );
        Ok(parsed)
    }

    /// Blog entries laid out two per row
    pub fn blog_rows(&self) -> std::slice::Chunks<'_, BlogEntry> {
        self.blog.chunks(2)
    }

    /// Copy of the content without the items [`validate`](Self::validate)
    /// reports as unrenderable
    ///
    /// Social, nav, timeline and blog entries with a bad link are dropped, as
    /// is every repeat of a blog entry or life section id after the first.
    pub fn without_malformed(&self) -> SiteContent {
        let mut content = self.clone();
        content.social.retain(|link| validate::is_valid_link(&link.href));
        content.nav.retain(|link| validate::is_valid_link(&link.href));
        content
            .timeline
            .items
            .retain(|item| validate::is_valid_link(&item.company_url));

        let mut blog_ids = HashSet::new();
        content
            .blog
            .retain(|entry| validate::is_valid_link(&entry.link) && blog_ids.insert(entry.id.clone()));

        let mut section_ids = HashSet::new();
        content
            .life
            .sections
            .retain(|section| section_ids.insert(section.id.clone()));

        content
    }

    /// Report malformed items
    ///
    /// Issues never fail the build; the affected items are left out of the
    /// rendered pages.
    pub fn validate(&self) -> Vec<ContentIssue> {
        validate::check(self)
    }
}
