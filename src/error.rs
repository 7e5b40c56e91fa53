//! Error types for report generation.
//!
//! Every internal operation returns [`Result`]. The public writer entry
//! points in [`crate::outputs`] never surface these errors to the caller;
//! they log them and return normally.

use thiserror::Error;

/// Failures that can occur while loading inputs or writing report artifacts.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Directory creation, file creation, permission or disk-full failures.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The result tree could not be encoded or decoded as JSON.
    #[error("JSON encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The YAML configuration file is malformed.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// The input document is valid JSON but not a result tree.
    #[error("invalid result tree: {0}")]
    Shape(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReportError>;
