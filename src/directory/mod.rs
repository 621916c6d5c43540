//! # Remote Country Directory
//!
//! The external collaborator: a third-party HTTP API serving the full
//! country collection and a by-code lookup. The application talks to it
//! through the [`CountryDirectory`] trait so tests can substitute a mock
//! server or a static in-memory directory.

use std::fmt;

use async_trait::async_trait;

pub mod rest;
pub mod types;

pub use rest::RestDirectory;
pub use types::Country;

/// Errors that can occur while talking to the directory.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum DirectoryError {
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// API returned an error response. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// Failed to parse the response body. Not retryable.
    Parse(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Network(msg) => write!(f, "network error: {msg}"),
            DirectoryError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            DirectoryError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for DirectoryError {}

/// A source of country records.
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    /// Returns the name of the directory backend.
    fn name(&self) -> &str;

    /// Fetches the full country collection.
    async fn fetch_all(&self) -> Result<Vec<Country>, DirectoryError>;

    /// Fetches a single country by its three-letter code.
    async fn fetch_by_code(&self, code: &str) -> Result<Country, DirectoryError>;
}
