//! Page components
//!
//! Every component appends to a [`Markup`](crate::html::Markup) and takes
//! the content it shows by reference.

pub mod about;
pub mod blog;
pub mod chrome;
pub mod life;
pub mod note;

pub use about::{about_section, greeting, timeline};
pub use blog::{blog_card, blog_section, note_article};
pub use chrome::{accessible_nav, footer, global_navigation, header, to_top};
pub use life::life_section;
pub use note::note_embed;
