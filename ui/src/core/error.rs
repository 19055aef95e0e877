//! Error types for the persistence helpers.
//!
//! Nothing in the rendered UI fails; these only describe why a theme or
//! session could not be read from or written to browser storage.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// No `window` or `localStorage` (private mode, non-browser target).
    #[error("localStorage not available")]
    Unavailable,

    /// The browser rejected the operation (quota, security policy).
    #[error("storage {op} failed for key `{key}`")]
    Access { op: &'static str, key: String },

    /// A stored value could not be encoded or decoded.
    #[error("malformed stored value: {0}")]
    Malformed(#[from] serde_json::Error),
}
