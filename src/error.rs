//! Error types for text tools, storage and clipboard collaborators.

use thiserror::Error;

/// Errors raised by the transform engine.
///
/// Both kinds are recoverable: the session reports them and leaves the
/// document untouched.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A parameter could not be used, e.g. a negative column index.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The search pattern is not a valid regular expression.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors from a key-value store collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed stored data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Any failure reported by a backend that has no richer error type.
    #[error("storage backend failed: {0}")]
    Backend(String),
}

/// Errors from a clipboard collaborator.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,

    #[error("clipboard write failed: {0}")]
    Backend(String),
}

/// A tool parameter was given a value it cannot hold.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("expected true or false for {param}, got '{value}'")]
    NotABool { param: &'static str, value: String },
}
