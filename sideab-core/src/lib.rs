//! Core of the sideab portfolio site
//!
//! - [`segment`]: sentence segmentation on the Japanese full-width period,
//!   the only piece of text processing the site performs.
//! - [`content`]: serde-backed registries (profile, timeline, blog, life
//!   page) loaded from TOML, with validation of malformed items.
//!
//! # Example
//!
//! ```rust
//! use sideab_core::segment::render_with;
//!
//! let text = "前職での活動をまとめた記事です。全体的なスタンスは変わっていません。";
//! let lines = render_with(text, "\n");
//! assert_eq!(lines.lines().count(), 2);
//! ```

pub mod content;
pub mod error;
pub mod segment;

pub use content::{ContentIssue, SiteContent};
pub use error::{CoreError, Result};
pub use segment::{line_breaks, segments, split_sentences, Piece, Pieces, Segments, TERMINATOR};
