use serde::{Deserialize, Serialize};

use super::NOTE_DEFAULT_HEIGHT;

/// Whole-site metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    pub author: String,
    #[serde(default)]
    pub palette: Palette,
}

fn default_lang() -> String {
    "ja".to_string()
}

/// Site colour palette, written out as CSS custom properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub white: String,
    pub green: String,
    pub yellow: String,
    pub navy: String,
    pub light_green: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            white: "#F8F8F6".to_string(),
            green: "#859A93".to_string(),
            yellow: "#FDCB6E".to_string(),
            navy: "#2C3E50".to_string(),
            light_green: "#E7EAE7".to_string(),
        }
    }
}

impl Palette {
    /// `(css variable name, colour)` pairs in a stable order
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("--site-white", self.white.as_str()),
            ("--site-green", self.green.as_str()),
            ("--site-yellow", self.yellow.as_str()),
            ("--site-navy", self.navy.as_str()),
            ("--site-light-green", self.light_green.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    pub href: String,
}

/// Image reference with optional caption markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
    /// Trusted HTML fragment
    #[serde(default)]
    pub caption: Option<String>,
}

/// Large greeting on the home page: `lead` + highlighted `accent` + `tail`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub image: Image,
    pub lead: String,
    pub accent: String,
    pub tail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub name_romaji: String,
    pub portrait: Image,
    pub roles: Vec<String>,
    /// Trusted HTML paragraphs shown under the roles
    #[serde(default)]
    pub bio_html: Vec<String>,
    pub greeting: Greeting,
}

/// One employer on the career timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub period: String,
    pub company: String,
    pub company_url: String,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub show_connector: Option<bool>,
}

impl TimelineItem {
    /// Whether the vertical connector below this item is drawn
    ///
    /// An explicit `show_connector` wins; otherwise every item but the last
    /// gets one.
    pub fn connector_visible(&self, is_last: bool) -> bool {
        self.show_connector.unwrap_or(!is_last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineOther {
    pub title: String,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub items: Vec<TimelineItem>,
    pub other: TimelineOther,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub term: String,
    pub desc: String,
}

/// Content block of an about subsection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Plain text, broken into lines at sentence terminators
    Text { text: String },
    /// Trusted HTML fragment rendered as a paragraph
    Html { html: String },
    /// Bulleted list of plain text items
    List { items: Vec<String> },
    /// Highlighted box with a heading and HTML paragraphs
    Callout {
        title: String,
        paragraphs: Vec<String>,
    },
    /// Spoken languages
    Languages { items: Vec<LanguageSkill> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSubsection {
    pub title: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogEntryKind {
    /// Article hosted on note.com, shown as an embed
    Note,
    /// External article, shown as an image card
    Article,
}

/// An embeddable note.com article
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEmbed<'a> {
    pub note_id: &'a str,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogEntry {
    pub id: String,
    pub title: String,
    pub kind: BlogEntryKind,
    pub link: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub note_id: Option<String>,
    #[serde(default)]
    pub note_height: Option<u32>,
    #[serde(default)]
    pub image: Option<Image>,
}

impl BlogEntry {
    /// Card image of an article entry
    ///
    /// Articles without an image have no card and are left out of the page.
    pub fn card_image(&self) -> Option<&Image> {
        match self.kind {
            BlogEntryKind::Article => self.image.as_ref(),
            BlogEntryKind::Note => None,
        }
    }

    /// Embed of a note entry with a well-formed note id
    pub fn note_embed(&self) -> Option<NoteEmbed<'_>> {
        let note_id = self.note_id.as_deref().filter(|id| super::is_valid_note_id(id))?;
        Some(NoteEmbed {
            note_id,
            height: self.note_height.unwrap_or(NOTE_DEFAULT_HEIGHT),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeSectionNote {
    pub note_id: String,
    #[serde(default)]
    pub height: Option<u32>,
}

impl LifeSectionNote {
    /// Embed for this note, if its id is well formed
    pub fn embed(&self) -> Option<NoteEmbed<'_>> {
        if !super::is_valid_note_id(&self.note_id) {
            return None;
        }
        Some(NoteEmbed {
            note_id: &self.note_id,
            height: self.height.unwrap_or(NOTE_DEFAULT_HEIGHT),
        })
    }
}

/// One hobby topic on the life page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeSection {
    pub id: String,
    pub title: String,
    /// Description paragraphs; may contain trusted inline HTML
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub note_embeds: Vec<LifeSectionNote>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub secondary_image: Option<Image>,
}

impl LifeSection {
    /// Primary then secondary image, skipping absent ones
    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.image.iter().chain(self.secondary_image.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifePage {
    pub title: String,
    pub description: String,
    pub intro: String,
    pub outro: String,
    pub sections: Vec<LifeSection>,
}
