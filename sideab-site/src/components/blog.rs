//! Blog section: article cards and note embeds, two per row

use super::note::note_embed;
use crate::html::Markup;
use sideab_core::content::{BlogEntry, BlogEntryKind};
use sideab_core::SiteContent;

pub fn blog_section(m: &mut Markup, content: &SiteContent) {
    m.open("section", &[("id", "blog"), ("class", "blog")])
        .element("h2", &[], "Blog")
        .open("div", &[("class", "blog-rows")]);

    for row in content.blog_rows() {
        m.open("div", &[("class", "two-columns")]);
        for entry in row {
            m.open("div", &[("class", "blog-entry")]);
            match entry.kind {
                BlogEntryKind::Article => blog_card(m, entry),
                BlogEntryKind::Note => note_article(m, entry),
            }
            m.close("div");
        }
        if row.len() == 1 {
            m.element("div", &[("class", "spacer"), ("aria-hidden", "true")], "");
        }
        m.close("div");
    }

    m.close("div").close("section");
}

/// Image card of an article; nothing for articles without an image
pub fn blog_card(m: &mut Markup, entry: &BlogEntry) {
    let Some(image) = entry.card_image() else {
        tracing::debug!(id = %entry.id, "skipping article card without image");
        return;
    };

    m.open("div", &[("class", "blog-card")])
        .open(
            "a",
            &[
                ("href", entry.link.as_str()),
                ("target", "_blank"),
                ("rel", "noopener noreferrer"),
                ("class", "card-link"),
            ],
        )
        .void(
            "img",
            &[
                ("src", image.src.as_str()),
                ("alt", image.alt.as_str()),
                ("class", "card-image"),
            ],
        )
        .open("div", &[("class", "card-overlay")])
        .element("p", &[], &entry.title)
        .close("div")
        .close("a");
    descriptions(m, entry);
    m.close("div");
}

/// Note embed with a screen-reader heading
pub fn note_article(m: &mut Markup, entry: &BlogEntry) {
    m.open("article", &[("class", "note-article")])
        .open("h3", &[("class", "sr-only")])
        .element(
            "a",
            &[
                ("href", entry.link.as_str()),
                ("target", "_blank"),
                ("rel", "noopener noreferrer"),
            ],
            &entry.title,
        )
        .close("h3");

    match entry.note_embed() {
        Some(embed) => {
            m.open("div", &[]);
            note_embed(m, embed, Some(entry.title.as_str()));
            m.close("div");
        }
        None => tracing::debug!(id = %entry.id, "skipping note embed without a valid note id"),
    }

    descriptions(m, entry);
    m.close("article");
}

fn descriptions(m: &mut Markup, entry: &BlogEntry) {
    m.open("div", &[("class", "descriptions")]);
    for text in &entry.description {
        m.open("p", &[]).segmented(text).close("p");
    }
    m.close("div");
}

/// Whether any blog entry renders a note embed
pub fn has_note_embeds(content: &SiteContent) -> bool {
    content.blog.iter().any(|entry| {
        entry.kind == BlogEntryKind::Note && entry.note_embed().is_some()
    })
}
