use std::collections::HashSet;
use thiserror::Error;

use super::{is_valid_note_id, BlogEntryKind, SiteContent};

/// A malformed content item
///
/// The item is omitted (or partly omitted) from the rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentIssue {
    /// Article entries need an image for their card
    #[error("blog entry '{id}' is an article without an image; its card is omitted")]
    ArticleWithoutImage { id: String },

    /// Note entries need a note id for their embed
    #[error("blog entry '{id}' is a note without a note id; its embed is omitted")]
    NoteWithoutId { id: String },

    #[error("{owner}: malformed note id '{note_id}'; its embed is omitted")]
    InvalidNoteId { owner: String, note_id: String },

    #[error("{owner}: link '{link}' is neither absolute nor site-relative; the item is omitted")]
    InvalidLink { owner: String, link: String },

    #[error("duplicate {kind} id '{id}'; only the first is rendered")]
    DuplicateId { kind: &'static str, id: String },
}

pub(super) fn is_valid_link(link: &str) -> bool {
    ["https://", "http://", "/", "#"]
        .iter()
        .any(|prefix| link.starts_with(prefix))
}

pub(super) fn check(content: &SiteContent) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    let mut link = |owner: String, link: &str| {
        if !is_valid_link(link) {
            issues.push(ContentIssue::InvalidLink {
                owner,
                link: link.to_string(),
            });
        }
    };

    for social in &content.social {
        link(format!("social link '{}'", social.name), &social.href);
    }
    for nav in &content.nav {
        link(format!("nav link '{}'", nav.id), &nav.href);
    }
    for item in &content.timeline.items {
        link(format!("timeline '{}'", item.company), &item.company_url);
    }
    for entry in &content.blog {
        link(format!("blog entry '{}'", entry.id), &entry.link);
    }

    let mut blog_ids = HashSet::new();
    for entry in &content.blog {
        if !blog_ids.insert(entry.id.as_str()) {
            issues.push(ContentIssue::DuplicateId {
                kind: "blog entry",
                id: entry.id.clone(),
            });
        }

        match entry.kind {
            BlogEntryKind::Article if entry.image.is_none() => {
                issues.push(ContentIssue::ArticleWithoutImage {
                    id: entry.id.clone(),
                });
            }
            BlogEntryKind::Note => match entry.note_id.as_deref() {
                None => issues.push(ContentIssue::NoteWithoutId {
                    id: entry.id.clone(),
                }),
                Some(note_id) if !is_valid_note_id(note_id) => {
                    issues.push(ContentIssue::InvalidNoteId {
                        owner: format!("blog entry '{}'", entry.id),
                        note_id: note_id.to_string(),
                    });
                }
                Some(_) => {}
            },
            BlogEntryKind::Article => {}
        }
    }

    let mut section_ids = HashSet::new();
    for section in &content.life.sections {
        if !section_ids.insert(section.id.as_str()) {
            issues.push(ContentIssue::DuplicateId {
                kind: "life section",
                id: section.id.clone(),
            });
        }

        for note in &section.note_embeds {
            if !is_valid_note_id(&note.note_id) {
                issues.push(ContentIssue::InvalidNoteId {
                    owner: format!("life section '{}'", section.id),
                    note_id: note.note_id.clone(),
                });
            }
        }
    }

    issues
}
