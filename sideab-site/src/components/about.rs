//! Home page greeting and about section

use crate::html::Markup;
use sideab_core::content::{AboutSubsection, Block, Greeting, Profile, Timeline};
use sideab_core::SiteContent;

pub fn greeting(m: &mut Markup, greeting: &Greeting) {
    m.open("section", &[("class", "greeting")])
        .void(
            "img",
            &[
                ("src", greeting.image.src.as_str()),
                ("alt", greeting.image.alt.as_str()),
                ("width", "388"),
                ("height", "388"),
            ],
        )
        .open("p", &[("class", "greeting-text")])
        .text(&greeting.lead)
        .element("span", &[("class", "accent")], &greeting.accent)
        .text(&greeting.tail)
        .close("p")
        .close("section");
}

/// Profile card, career timeline and the about subsections
pub fn about_section(m: &mut Markup, content: &SiteContent) {
    m.open("section", &[("id", "about"), ("class", "about")])
        .element("h2", &[], "About")
        .open("div", &[("class", "two-columns")]);
    profile(m, &content.profile);
    m.open("div", &[("class", "panel")]);
    timeline(m, &content.timeline);
    m.close("div").close("div");

    m.open("div", &[("class", "subsections")]);
    for subsection in &content.about {
        about_subsection(m, subsection);
    }
    m.close("div").close("section");
}

fn profile(m: &mut Markup, profile: &Profile) {
    m.open("div", &[("class", "profile")])
        .void(
            "img",
            &[
                ("src", profile.portrait.src.as_str()),
                ("alt", profile.portrait.alt.as_str()),
                ("class", "portrait"),
                ("width", "144"),
                ("height", "144"),
            ],
        )
        .open("div", &[("class", "profile-text")])
        .open("p", &[("class", "name")])
        .element("span", &[("class", "name-native")], &profile.name)
        .element("span", &[("class", "name-romaji")], &profile.name_romaji)
        .close("p")
        .open("p", &[("class", "roles")]);

    for (i, role) in profile.roles.iter().enumerate() {
        if i > 0 {
            m.br();
        }
        m.text(role);
    }
    m.close("p");

    for paragraph in &profile.bio_html {
        m.open("p", &[]).raw(paragraph).close("p");
    }
    m.close("div").close("div");
}

/// Vertical career timeline followed by the "other" list
pub fn timeline(m: &mut Markup, timeline: &Timeline) {
    m.open("div", &[("class", "timeline")])
        .open("ol", &[]);

    let last = timeline.items.len().saturating_sub(1);
    for (i, item) in timeline.items.iter().enumerate() {
        let dot = if item.is_current { "dot current" } else { "dot" };

        m.open("li", &[]).element("span", &[("class", dot)], "");
        if item.connector_visible(i == last) {
            m.element("span", &[("class", "connector")], "");
        }
        m.element("p", &[("class", "period")], &item.period)
            .open("p", &[("class", "company")])
            .element(
                "a",
                &[
                    ("href", item.company_url.as_str()),
                    ("target", "_blank"),
                    ("rel", "noopener noreferrer"),
                ],
                &item.company,
            )
            .close("p")
            .close("li");
    }
    m.close("ol");

    m.open("div", &[("class", "timeline-other")])
        .element("p", &[("class", "title")], &timeline.other.title)
        .open("ul", &[]);
    for description in &timeline.other.descriptions {
        m.element("li", &[], description);
    }
    m.close("ul").close("div").close("div");
}

fn about_subsection(m: &mut Markup, subsection: &AboutSubsection) {
    m.open("div", &[("class", "subsection")])
        .element("h3", &[("class", "subsection-title")], &subsection.title)
        .open("div", &[("class", "subsection-body")]);
    for block in &subsection.blocks {
        block_markup(m, block);
    }
    m.close("div").close("div");
}

fn block_markup(m: &mut Markup, block: &Block) {
    match block {
        Block::Text { text } => {
            m.open("p", &[]).segmented(text).close("p");
        }
        Block::Html { html } => {
            m.open("p", &[]).raw(html).close("p");
        }
        Block::List { items } => {
            m.open("ul", &[]);
            for item in items {
                m.element("li", &[], item);
            }
            m.close("ul");
        }
        Block::Callout { title, paragraphs } => {
            m.open("div", &[("class", "callout")])
                .element("p", &[("class", "callout-title")], title);
            for paragraph in paragraphs {
                m.open("p", &[]).raw(paragraph).close("p");
            }
            m.close("div");
        }
        Block::Languages { items } => {
            m.open("ul", &[("class", "languages")]);
            for skill in items {
                m.open("li", &[])
                    .element("span", &[("class", "term")], &format!("{}：", skill.term))
                    .element("span", &[], &skill.desc)
                    .close("li");
            }
            m.close("ul");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_about() -> String {
        let content = SiteContent::builtin().unwrap();
        let mut m = Markup::new();
        about_section(&mut m, &content);
        m.into_string()
    }

    #[test]
    fn test_text_blocks_are_segmented() {
        let html = render_about();
        assert!(html.contains(
            "<p>自分が拡張される楽しさを増やす仕事がしたいです。<br />そのための重要な手段として生成AIがあると思っています。</p>"
        ));
        // Single sentence, no break
        assert!(html.contains(
            "<p>また、2024年末以降、リサーチプロセスやプロトタイピングにおける、Vibe Codingなどの生成AI活用を盛んに行なっています。</p>"
        ));
    }

    #[test]
    fn test_html_blocks_are_raw() {
        let html = render_about();
        assert!(html.contains(r#"<a href="https://support.freee.co.jp/hc/ja/articles/12527153459737""#));
    }

    #[test]
    fn test_timeline_markup() {
        let content = SiteContent::builtin().unwrap();
        let mut m = Markup::new();
        timeline(&mut m, &content.timeline);
        let html = m.into_string();

        assert_eq!(html.matches("<li>").count(), 4 + 3);
        assert_eq!(html.matches(r#"class="connector""#).count(), 3);
        assert_eq!(html.matches(r#"class="dot current""#).count(), 1);
        assert!(html.contains("<li>慶應義塾大学文学部非常勤講師</li>"));
    }

    #[test]
    fn test_profile_roles_and_languages() {
        let html = render_about();
        assert!(html.contains("プロダクトリサーチャー<br />ワークプレイスエスノグラファ"));
        assert!(html.contains(r#"<span class="term">英語：</span>"#));
    }

    #[test]
    fn test_greeting() {
        let content = SiteContent::builtin().unwrap();
        let mut m = Markup::new();
        greeting(&mut m, &content.profile.greeting);
        assert!(m
            .into_string()
            .contains(r#"Hello, I am Norihisa <span class="accent">Awa</span>mura."#));
    }
}
