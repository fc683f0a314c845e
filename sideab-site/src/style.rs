//! Site stylesheet

use sideab_core::content::Palette;

const BASE_RULES: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; background: var(--site-white); color: var(--site-navy); font-family: "Noto Sans JP", "Roboto", sans-serif; }
a { color: inherit; }
a:hover { color: var(--site-green); }
h2, h3 { font-weight: 300; letter-spacing: 0.03em; color: var(--site-green); }
.container { max-width: 800px; margin: 0 auto; padding: 0 1.5rem; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0, 0, 0, 0); white-space: nowrap; }
.site-header { display: flex; align-items: center; height: 6rem; }
.header-links { margin-left: auto; display: flex; flex-direction: column; align-items: flex-end; gap: 0.5rem; }
.side-switch { border: 1px solid var(--site-green); border-radius: 0.375rem; padding: 0.125rem 0.5rem; font-size: 0.75rem; color: var(--site-green); text-decoration: none; }
.social { display: flex; gap: 0.5rem; }
.global-nav nav { display: flex; justify-content: flex-end; gap: 1.5rem; font-size: 0.75rem; }
.greeting { position: relative; display: flex; justify-content: center; margin-top: 2rem; }
.greeting-text { position: absolute; top: 50%; transform: translateY(-50%); font-size: 1.5rem; font-weight: 700; color: var(--site-green); }
.greeting-text .accent { color: var(--site-yellow); }
.two-columns { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.panel, .callout { background: var(--site-light-green); border-radius: 0.5rem; padding: 1.5rem; }
.portrait { border-radius: 50%; object-fit: cover; }
.timeline ol { list-style: none; padding: 0; }
.timeline li { position: relative; padding-left: 2.5rem; margin-bottom: 2rem; }
.timeline .dot { position: absolute; left: 0; top: 0.375rem; width: 0.75rem; height: 0.75rem; border-radius: 50%; border: 2px solid var(--site-green); background: var(--site-white); }
.timeline .dot.current { background: var(--site-green); }
.timeline .connector { position: absolute; left: 5px; top: 1rem; width: 1px; height: calc(100% + 1rem); background: var(--site-green); }
.subsection { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; margin-top: 4rem; font-size: 0.875rem; line-height: 1.7; }
.blog-rows > .two-columns { margin-bottom: 4rem; }
.card-link { position: relative; display: block; height: 200px; overflow: hidden; border-radius: 0.5rem; }
.card-image { width: 100%; height: 100%; object-fit: cover; object-position: top; }
.card-overlay { position: absolute; inset: 0; display: flex; align-items: flex-end; padding: 1rem; color: #fff; background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent); }
.note-embed { width: 100%; border: 0; }
.media { display: flex; flex-direction: column; gap: 1.5rem; }
.media-tight { gap: 0.1rem; }
.figure-frame, .life-icon { width: 50%; }
.figure-frame img, .life-icon img { width: 100%; height: auto; }
.life-accent { font-size: 0.75rem; }
.to-top { text-align: center; margin: 2rem 0 1rem; }
.site-footer { display: flex; justify-content: space-between; padding: 1.5rem; font-size: 0.75rem; color: var(--site-green); }
.footer-nav { display: flex; gap: 1.5rem; }
.copyright { margin-left: auto; font-size: 0.5rem; }
@media (max-width: 800px) {
  .two-columns, .subsection { grid-template-columns: 1fr; }
}
"#;

/// Stylesheet with the palette exposed as CSS custom properties
pub fn stylesheet(palette: &Palette) -> String {
    let mut css = String::from(":root {\n");
    for (name, colour) in palette.entries() {
        css.push_str("  ");
        css.push_str(name);
        css.push_str(": ");
        css.push_str(colour);
        css.push_str(";\n");
    }
    css.push('}');
    css.push_str(BASE_RULES);
    css
}
