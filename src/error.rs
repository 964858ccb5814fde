//! Error type shared across the crate.
//!
//! Remote failures are surfaced as values so callers can tell a missing
//! collection apart from a transport failure or a rejected write.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Credentials were absent at client construction.
    #[error("missing credentials: {0}. Set ZOTERO_API_KEY and ZOTERO_LIBRARY_ID in .env")]
    MissingCredentials(&'static str),

    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// A collection or item key did not resolve.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid response payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
