//! Side B: hobby sections

use super::note::note_embed;
use crate::html::{break_after_terminators, Markup};
use sideab_core::content::{Image, LifeSection};

/// One hobby section: descriptions on the left, embeds and images on the right
///
/// `site_icon` is the greeting illustration; a section reusing it shows it
/// as a bare icon instead of a captioned figure.
pub fn life_section(m: &mut Markup, section: &LifeSection, site_icon: &str) {
    let right_column = if section.note_embeds.is_empty() {
        "media"
    } else {
        "media media-tight"
    };

    m.open("section", &[("id", section.id.as_str()), ("class", "life-section")])
        .element("h3", &[], &section.title)
        .open("div", &[("class", "two-columns")])
        .open("div", &[("class", "life-text")]);
    for description in &section.descriptions {
        m.open("p", &[])
            .raw(&break_after_terminators(description))
            .close("p");
    }
    m.close("div").open("div", &[("class", right_column)]);

    let title = format!("{} note", section.title);
    for note in &section.note_embeds {
        let Some(embed) = note.embed() else {
            tracing::debug!(section = %section.id, note_id = %note.note_id, "skipping malformed note embed");
            continue;
        };
        m.open("div", &[("class", "note-frame")]);
        note_embed(m, embed, Some(title.as_str()));
        m.close("div");
    }

    for image in section.images() {
        image_figure(m, image, image.src == site_icon);
    }

    m.close("div").close("div").close("section");
}

fn image_figure(m: &mut Markup, image: &Image, is_icon: bool) {
    if is_icon {
        m.open("div", &[("class", "life-icon")])
            .void(
                "img",
                &[
                    ("src", image.src.as_str()),
                    ("alt", image.alt.as_str()),
                    ("width", "388"),
                    ("height", "388"),
                ],
            )
            .close("div");
        return;
    }

    m.open("figure", &[])
        .open("div", &[("class", "figure-frame")])
        .void(
            "img",
            &[
                ("src", image.src.as_str()),
                ("alt", image.alt.as_str()),
                ("width", "800"),
                ("height", "600"),
            ],
        )
        .close("div");
    if let Some(caption) = &image.caption {
        m.open("figcaption", &[("class", "life-accent")])
            .raw(caption)
            .close("figcaption");
    }
    m.close("figure");
}

#[cfg(test)]
mod tests {
    use super::*;
    use sideab_core::SiteContent;

    fn render_section(id: &str) -> String {
        let content = SiteContent::builtin().unwrap();
        let section = content.life.sections.iter().find(|s| s.id == id).unwrap();
        let mut m = Markup::new();
        life_section(&mut m, section, &content.profile.greeting.image.src);
        m.into_string()
    }

    #[test]
    fn test_breaks_after_every_terminator() {
        let html = render_section("elephant");
        assert!(html.contains(
            "<p>象が好きなのも、象山がアイコンになっている理由です。<br />好きな理由はお鼻が長いからです。<br />とくにアジア象のフォルムが好みです。<br /></p>"
        ));
    }

    #[test]
    fn test_inline_html_kept() {
        let html = render_section("vibe-coding");
        assert!(html.contains(r#"<a href="https://en.wikipedia.org/wiki/Vibe_coding""#));
        assert!(!html.contains("<figcaption"));
    }

    #[test]
    fn test_site_icon_rendered_without_figure() {
        let html = render_section("taiwan");
        assert!(html.contains("life-icon"));
        assert!(!html.contains("<figure>"));
        assert!(html.contains("media media-tight"));
        assert_eq!(html.matches("<iframe").count(), 2);
        assert!(html.contains(r#"title="Taiwan note""#));
    }

    #[test]
    fn test_captioned_figure() {
        let html = render_section("music");
        assert!(html.contains("<figure>"));
        assert!(html.contains(r#"<figcaption class="life-accent">※画像は<a href="#));
    }

    #[test]
    fn test_secondary_image_follows_primary() {
        let content = SiteContent::builtin().unwrap();
        let mut section = content.life.sections[0].clone();
        section.secondary_image = Some(Image {
            src: "/img/second.png".to_string(),
            alt: "second".to_string(),
            caption: None,
        });

        let mut m = Markup::new();
        life_section(&mut m, &section, "/img/greeting.svg");
        let html = m.into_string();
        let first = html.find("/img/jtnc.png").unwrap();
        let second = html.find("/img/second.png").unwrap();
        assert!(first < second);
    }
}
