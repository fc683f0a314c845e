//! Document shell and page bodies

use crate::components::{self, blog::has_note_embeds};
use crate::html::Markup;
use crate::page::Page;
use sideab_core::content::NOTE_EMBED_SCRIPT_SRC;
use sideab_core::SiteContent;

/// Stylesheet path referenced by every page
pub const STYLESHEET_HREF: &str = "/style.css";

const ICON_FONT_HREF: &str = "https://fonts.googleapis.com/icon?family=Material+Icons";

/// Render a complete HTML document for `page`
///
/// Items that fail validation are left out.
pub fn render_page(page: Page, content: &SiteContent) -> String {
    let content = &content.without_malformed();
    let title = page.title(content);
    let description = page.description(content);

    let mut m = Markup::new();
    m.raw("<!DOCTYPE html>\n")
        .open("html", &[("lang", content.meta.lang.as_str())])
        .open("head", &[])
        .void("meta", &[("charset", "utf-8")])
        .void(
            "meta",
            &[
                ("name", "viewport"),
                ("content", "width=device-width, initial-scale=1"),
            ],
        )
        .element("title", &[], title)
        .void("meta", &[("name", "description"), ("content", description)])
        .void("meta", &[("property", "og:title"), ("content", title)])
        .void(
            "meta",
            &[("property", "og:description"), ("content", description)],
        )
        .void("meta", &[("property", "og:type"), ("content", "website")])
        .void(
            "meta",
            &[("name", "twitter:card"), ("content", "summary_large_image")],
        )
        .void("meta", &[("name", "twitter:title"), ("content", title)])
        .void(
            "meta",
            &[("name", "twitter:description"), ("content", description)],
        )
        .void("link", &[("rel", "stylesheet"), ("href", STYLESHEET_HREF)])
        .void("link", &[("rel", "stylesheet"), ("href", ICON_FONT_HREF)])
        .close("head")
        .open("body", &[("id", "top")])
        .open("div", &[("class", "page")]);

    components::header(&mut m, page, content);
    let needs_note_script = match page {
        Page::Home => {
            home_body(&mut m, content);
            has_note_embeds(content)
        }
        Page::Life => {
            life_body(&mut m, content);
            content
                .life
                .sections
                .iter()
                .flat_map(|s| &s.note_embeds)
                .any(|note| note.embed().is_some())
        }
    };
    components::footer(&mut m, page, content);
    m.close("div");

    if needs_note_script {
        m.open(
            "script",
            &[("src", NOTE_EMBED_SCRIPT_SRC), ("async", "async")],
        )
        .close("script");
    }

    m.close("body").close("html").raw("\n");
    m.into_string()
}

fn home_body(m: &mut Markup, content: &SiteContent) {
    components::global_navigation(m, content);
    m.open("main", &[("class", "container")]);
    components::greeting(m, &content.profile.greeting);
    components::accessible_nav(m, Page::Home, content);
    components::about_section(m, content);
    components::blog_section(m, content);
    m.close("main");
    components::to_top(m);
}

fn life_body(m: &mut Markup, content: &SiteContent) {
    let life = &content.life;
    let site_icon = content.profile.greeting.image.src.as_str();

    m.open("main", &[("class", "container")])
        .open("p", &[("class", "life-intro")])
        .segmented(&life.intro)
        .close("p");
    components::accessible_nav(m, Page::Life, content);

    m.open("div", &[("class", "life-sections")]);
    for section in &life.sections {
        components::life_section(m, section, site_icon);
    }
    m.close("div")
        .open("p", &[("class", "life-outro")])
        .segmented(&life.outro)
        .close("p")
        .close("main");
    components::to_top(m);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_document() {
        let content = SiteContent::builtin().unwrap();
        let html = render_page(Page::Home, &content);

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"ja\">"));
        assert!(html.contains("<title>Norihisa Awamura&#39;s Website</title>"));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image" />"#));
        assert!(html.contains(r#"<section id="about""#));
        assert!(html.contains(r#"<section id="blog""#));
        assert_eq!(html.matches(NOTE_EMBED_SCRIPT_SRC).count(), 1);
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_life_document() {
        let content = SiteContent::builtin().unwrap();
        let html = render_page(Page::Life, &content);

        assert!(html.contains("<title>Side B | Norihisa Awamura</title>"));
        assert!(html.contains(
            r#"<p class="life-intro">気がつけば割と多趣味なのかも、と思います。<br />主だったものの紹介です。</p>"#
        ));
        assert!(html.contains(
            r#"<p class="life-outro">そのほか、飲食、写真、映画など。<br />いったん、この辺にしておきます。</p>"#
        ));
        assert!(!html.contains(r#"id="about""#));
        assert_eq!(html.matches(r#"class="life-section""#).count(), 5);
    }

    #[test]
    fn test_malformed_links_are_not_rendered() {
        let mut content = SiteContent::builtin().unwrap();
        content.timeline.items[0].company_url = "javascript:alert(1)".to_string();
        content.social[0].href = "x.com/someone".to_string();

        let html = render_page(Page::Home, &content);
        assert!(!html.contains("javascript:alert(1)"));
        assert!(!html.contains("x.com/someone"));
    }

    #[test]
    fn test_note_script_omitted_without_embeds() {
        let mut content = SiteContent::builtin().unwrap();
        for section in &mut content.life.sections {
            section.note_embeds.clear();
        }
        let html = render_page(Page::Life, &content);
        assert!(!html.contains(NOTE_EMBED_SCRIPT_SRC));
    }
}
