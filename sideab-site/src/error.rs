//! Site build errors

use sideab_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    /// Content could not be loaded
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Output could not be written
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for site operations
pub type Result<T> = std::result::Result<T, SiteError>;
