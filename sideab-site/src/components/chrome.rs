//! Header, navigation and footer shared by every page

use crate::html::Markup;
use crate::page::Page;
use sideab_core::SiteContent;

const LOGO_SRC: &str = "/img/logo.svg";
const TO_TOP_SRC: &str = "/img/to-top.svg";

/// Logo, side switch and social icons
pub fn header(m: &mut Markup, page: Page, content: &SiteContent) {
    let other = page.other_side();
    let logo_alt = format!("{} ロゴ", content.meta.author);

    m.open("header", &[("class", "site-header container")])
        .open("a", &[("href", "/"), ("class", "site-logo")])
        .void(
            "img",
            &[
                ("src", LOGO_SRC),
                ("alt", logo_alt.as_str()),
                ("width", "96"),
                ("height", "96"),
            ],
        )
        .close("a")
        .open("div", &[("class", "header-links")])
        .element(
            "a",
            &[("href", other.route()), ("class", "side-switch")],
            &page.switch_label(),
        )
        .open("nav", &[("aria-label", "ソーシャルリンク"), ("class", "social")]);

    for link in &content.social {
        m.open(
            "a",
            &[
                ("href", link.href.as_str()),
                ("target", "_blank"),
                ("rel", "noopener noreferrer"),
            ],
        )
        .void(
            "img",
            &[
                ("src", link.icon.as_str()),
                ("alt", link.name.as_str()),
                ("width", "20"),
                ("height", "20"),
            ],
        )
        .close("a");
    }

    m.close("nav").close("div").close("header");
}

/// In-page navigation shown on the home page
pub fn global_navigation(m: &mut Markup, content: &SiteContent) {
    m.open("section", &[("class", "global-nav")])
        .open("nav", &[("aria-label", "サイト内ナビゲーション")]);
    for link in &content.nav {
        m.element("a", &[("href", link.href.as_str())], &link.label);
    }
    m.close("nav").close("section");
}

/// Screen-reader copy of the header links
pub fn accessible_nav(m: &mut Markup, page: Page, content: &SiteContent) {
    m.open("div", &[("class", "sr-only"), ("aria-live", "off")])
        .open("p", &[])
        .text("ヘッダーナビゲーション: ")
        .element(
            "a",
            &[("href", page.other_side().route())],
            &page.switch_label(),
        )
        .close("p")
        .open("p", &[])
        .text("SNSリンク: ");

    for (i, link) in content.social.iter().enumerate() {
        if i > 0 {
            m.text(", ");
        }
        m.element("a", &[("href", link.href.as_str())], &link.name);
    }

    m.close("p").close("div");
}

/// Back-to-top arrow
pub fn to_top(m: &mut Markup) {
    m.open("div", &[("class", "to-top")])
        .open(
            "a",
            &[
                ("href", "#top"),
                ("class", "to-top-link"),
                ("aria-label", "ページ上部へ戻る"),
            ],
        )
        .void(
            "img",
            &[
                ("src", TO_TOP_SRC),
                ("alt", "To top"),
                ("width", "24"),
                ("height", "24"),
            ],
        )
        .close("a")
        .close("div");
}

/// Copyright line; the home page also repeats the in-page navigation
pub fn footer(m: &mut Markup, page: Page, content: &SiteContent) {
    let copyright = format!("© {} All rights reserved.", content.meta.author);

    m.open("footer", &[("class", "site-footer container")]);
    if page == Page::Home {
        m.open("div", &[("class", "footer-nav")]);
        for link in &content.nav {
            m.element("a", &[("href", link.href.as_str())], &link.label);
        }
        m.close("div");
    }
    m.element("div", &[("class", "copyright")], &copyright)
        .close("footer");
}
