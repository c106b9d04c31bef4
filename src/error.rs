//! Error Types

use thiserror::Error;

/// Failure talking to the news API.
///
/// Every variant is shown to the user the same way: the message in the error
/// panel plus a Retry button.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Error: {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("failed to write key {0}")]
    Write(String),

    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Share sheet or clipboard failure. Logged, never shown.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShareError {
    #[error("no browser window")]
    NoWindow,

    #[error("clipboard API is not available")]
    NoClipboard,

    #[error("share failed: {0}")]
    Js(String),
}
