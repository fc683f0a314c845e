//! Site pages

use sideab_core::SiteContent;
use std::fmt;
use std::path::PathBuf;

/// A page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Side A: profile, career and writing
    Home,
    /// Side B: hobbies
    Life,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Life];

    /// URL path of the page
    pub fn route(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Life => "/life",
        }
    }

    /// Output file relative to the build directory
    pub fn output_path(self) -> PathBuf {
        match self {
            Page::Home => PathBuf::from("index.html"),
            Page::Life => ["life", "index.html"].iter().collect(),
        }
    }

    /// Short label used by the side switch links
    pub fn side_label(self) -> &'static str {
        match self {
            Page::Home => "Side A",
            Page::Life => "Side B",
        }
    }

    /// The page the header switch points to
    pub fn other_side(self) -> Page {
        match self {
            Page::Home => Page::Life,
            Page::Life => Page::Home,
        }
    }

    /// Label of the link leading to the other side
    pub fn switch_label(self) -> String {
        format!("to {}", self.other_side().side_label())
    }

    pub fn title(self, content: &SiteContent) -> &str {
        match self {
            Page::Home => &content.meta.title,
            Page::Life => &content.life.title,
        }
    }

    pub fn description(self, content: &SiteContent) -> &str {
        match self {
            Page::Home => &content.meta.description,
            Page::Life => &content.life.description,
        }
    }

    /// Parse a page name as used on the command line
    pub fn from_name(name: &str) -> Option<Page> {
        match name {
            "home" | "side-a" => Some(Page::Home),
            "life" | "side-b" => Some(Page::Life),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Life => "life",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.route())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_and_paths() {
        assert_eq!(Page::Home.route(), "/");
        assert_eq!(Page::Life.route(), "/life");
        assert_eq!(Page::Home.output_path(), PathBuf::from("index.html"));
        assert_eq!(
            Page::Life.output_path(),
            PathBuf::from("life").join("index.html")
        );
    }

    #[test]
    fn test_switch_labels() {
        assert_eq!(Page::Home.switch_label(), "to Side B");
        assert_eq!(Page::Life.switch_label(), "to Side A");
    }

    #[test]
    fn test_from_name() {
        for page in Page::ALL {
            assert_eq!(Page::from_name(page.name()), Some(page));
        }
        assert_eq!(Page::from_name("side-b"), Some(Page::Life));
        assert_eq!(Page::from_name("blog"), None);
    }

    #[test]
    fn test_titles() {
        let content = SiteContent::builtin().unwrap();
        assert_eq!(Page::Home.title(&content), "Norihisa Awamura's Website");
        assert_eq!(Page::Life.title(&content), "Side B | Norihisa Awamura");
        assert_eq!(format!("{}", Page::Life), "life (/life)");
    }
}
