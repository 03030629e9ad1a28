//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Tripscope
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TripscopeError {
    /// The calendar feed could not be read or decoded as a whole.
    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing persisted state (coordinate cache) failed.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TripscopeError {
    /// Stable label suitable for logging fields.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Feed(_) => "feed",
            Self::Config(_) => "config",
            Self::Storage(_) => "storage",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Tripscope operations
pub type Result<T> = std::result::Result<T, TripscopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_tag_and_message() {
        let err = TripscopeError::Feed("unexpected end of input".into());
        let json = serde_json::to_string(&err).unwrap();

        assert_eq!(json, r#"{"type":"Feed","message":"unexpected end of input"}"#);
        assert_eq!(err.label(), "feed");
        assert_eq!(err.to_string(), "Feed error: unexpected end of input");
    }
}
