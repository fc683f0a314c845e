use crate::html::Markup;
use sideab_core::content::{NoteEmbed, NOTE_EMBED_URL_PREFIX};

/// Iframe for a note.com article
///
/// The embed script itself is added once per page by the layout.
pub fn note_embed(m: &mut Markup, embed: NoteEmbed<'_>, title: Option<&str>) {
    let src = format!("{NOTE_EMBED_URL_PREFIX}{}", embed.note_id);
    let height = embed.height.to_string();
    let fallback_title;
    let title = match title {
        Some(title) => title,
        None => {
            fallback_title = format!("note embed {}", embed.note_id);
            fallback_title.as_str()
        }
    };

    m.open(
        "iframe",
        &[
            ("class", "note-embed"),
            ("src", src.as_str()),
            ("style", "padding: 0; margin: 0"),
            ("height", height.as_str()),
            ("title", title),
            ("loading", "lazy"),
        ],
    )
    .close("iframe");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_embed_markup() {
        let mut m = Markup::new();
        let embed = NoteEmbed {
            note_id: "n3fa914851bad",
            height: 210,
        };
        note_embed(&mut m, embed, Some("Taiwan note"));
        let html = m.into_string();

        assert!(html.contains(r#"src="https://note.com/embed/notes/n3fa914851bad""#));
        assert!(html.contains(r#"height="210""#));
        assert!(html.contains(r#"title="Taiwan note""#));
        assert!(html.ends_with("</iframe>"));
    }

    #[test]
    fn test_note_embed_default_title() {
        let mut m = Markup::new();
        let embed = NoteEmbed {
            note_id: "n0f98eb519090",
            height: 400,
        };
        note_embed(&mut m, embed, None);
        assert!(m
            .into_string()
            .contains(r#"title="note embed n0f98eb519090""#));
    }
}
