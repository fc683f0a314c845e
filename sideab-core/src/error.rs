//! Core error types

use thiserror::Error;

/// Errors raised while loading content
///
/// Segmentation itself never fails.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Content file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Content is not valid TOML or does not match the schema
    #[error("invalid content in {origin}: {message}")]
    Parse { origin: String, message: String },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = CoreError::Parse {
            origin: "site.toml".to_string(),
            message: "missing field `meta`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid content in site.toml: missing field `meta`"
        );
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error as _;

        let err = CoreError::Io {
            path: "site.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("failed to read site.toml"));
        assert!(err.source().is_some());
    }
}
