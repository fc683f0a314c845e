//! Static rendering of the sideab portfolio site
//!
//! Pages are composed from [`sideab_core::SiteContent`] into HTML strings
//! and written to an output directory by [`SiteBuilder`].
//!
//! ```rust,no_run
//! use sideab_core::SiteContent;
//! use sideab_site::SiteBuilder;
//!
//! let content = SiteContent::builtin()?;
//! let report = SiteBuilder::new("dist").clean(true).build(&content)?;
//! println!("{} pages written", report.pages.len());
//! # Ok::<(), sideab_site::SiteError>(())
//! ```

pub mod builder;
pub mod components;
pub mod error;
pub mod html;
pub mod layout;
pub mod page;
pub mod style;

pub use builder::{BuildReport, PageOutput, SiteBuilder};
pub use error::{Result, SiteError};
pub use layout::render_page;
pub use page::Page;
