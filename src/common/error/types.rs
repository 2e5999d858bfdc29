use std::path::PathBuf;
use thiserror::Error;

/// Main error type for deck building and video insertion.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input presentation does not exist
    #[error("Presentation not found: {}", .0.display())]
    PresentationNotFound(PathBuf),

    /// Corrupted or malformed package
    #[error("Corrupted package: {0}")]
    CorruptedFile(String),

    /// Part or relationship not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Invalid content type
    #[error("Invalid content type: expected {expected}, got {got}")]
    InvalidContentType { expected: String, got: String },

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Media that cannot be embedded
    #[error("Unsupported media: {0}")]
    UnsupportedMedia(String),

    /// Invalid settings passed to a builder or the inserter
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for deck operations.
pub type Result<T> = std::result::Result<T, Error>;
