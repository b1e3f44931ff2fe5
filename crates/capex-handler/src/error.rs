//! Error types for the event handler.

use thiserror::Error;

/// Errors returned by `EventHandler::handle`.
///
/// Store failures are passed through as-is; nothing is retried.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Secret store failure.
    #[error(transparent)]
    Secret(#[from] SecretError),

    /// Object store failure.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The event carries no records.
    #[error("event contains no records")]
    MissingRecord,

    /// The object key does not decode to UTF-8.
    #[error("invalid object key: {0}")]
    InvalidKey(String),

    /// The object body is not UTF-8 text.
    #[error("object is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The object body is not valid JSON.
    #[error("malformed JSON content: {0}")]
    MalformedContent(#[from] serde_json::Error),
}

/// Errors from an object store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No object under this bucket and key.
    #[error("no such key: s3://{bucket}/{key}")]
    NoSuchKey { bucket: String, key: String },

    /// The key would resolve outside the bucket.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// I/O error reading the object.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from a secret store.
#[derive(Error, Debug)]
pub enum SecretError {
    /// No secret with this name in the region.
    #[error("secret '{name}' not found in {region}")]
    NotFound { name: String, region: String },

    /// The backing secret file could not be parsed.
    #[error("invalid secret store: {0}")]
    InvalidStore(String),

    /// I/O error reading the secret store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
