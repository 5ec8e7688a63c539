//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing persisted session data.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreError {
    #[error("failed to access store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored value for key {key} does not match its schema: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("store file {path} is not a key-value object: {source}")]
    BadFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("session history is inconsistent: {0}")]
    Inconsistent(String),
}
