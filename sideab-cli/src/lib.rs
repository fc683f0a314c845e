//! Sideab CLI library
//!
//! Command implementations behind the `sideab` binary: building the
//! portfolio site and segmenting Japanese text from the terminal.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
