//! Core Error Types
//!
//! Failures that can cross a component boundary. Validation problems are
//! not errors here: they are ordinary values (see `contact::FieldErrors`).

use serde::{Deserialize, Serialize};

/// Fixed user-facing message for every joke fetch failure
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching joke";

/// Result type for remote joke lookups
pub type FetchResult<T> = Result<T, FetchError>;

/// Why a joke fetch failed
///
/// The variants exist for logging only. The UI collapses all of them into
/// [`FETCH_ERROR_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchError {
    /// Request never produced a response (network, CORS, DNS, ...)
    Transport(String),
    /// Response arrived with a non-success status code
    Status(u16),
    /// Body was not the expected `{ "value": string }` shape
    Decode(String),
}

impl FetchError {
    /// Message shown to the user, independent of the variant
    pub fn user_message(&self) -> &'static str {
        FETCH_ERROR_MESSAGE
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::Status(code) => write!(f, "Unexpected status: {}", code),
            FetchError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Embedded config was not valid JSON for `BoardConfig`
    Parse(String),
    /// A field parsed but holds an unusable value
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
