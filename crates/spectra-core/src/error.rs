//! Error types for the Spectra scraper
//!
//! This module defines all error types used throughout the library.
//! SpectraError implements Serialize so it can be embedded in JSON responses.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for Spectra operations
#[derive(Error, Debug)]
pub enum SpectraError {
    /// Page retrieval failed (network, DNS or non-success HTTP status)
    #[error("Failed to fetch page: {0}")]
    Transport(#[from] reqwest::Error),

    /// The page was retrieved but its defining field never appeared
    #[error("Not found: {0}")]
    NotFound(String),

    /// A required parameter was missing or empty
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A locator in one of the rule tables is not a valid selector
    #[error("Failed to parse HTML: {0}")]
    Parse(String),
}

impl SpectraError {
    /// Whether this error means the page carried no catalog entry.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SpectraError::NotFound(_))
    }

    /// Whether this error came from the page retrieval itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, SpectraError::Transport(_))
    }
}

/// Serialize SpectraError as its display string
impl Serialize for SpectraError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for Spectra operations
pub type Result<T> = std::result::Result<T, SpectraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let error = SpectraError::NotFound("anime naruto".to_string());
        assert_eq!(error.to_string(), "Not found: anime naruto");
    }

    #[test]
    fn test_error_display_invalid_input() {
        let error = SpectraError::InvalidInput("missing title parameter".to_string());
        assert_eq!(error.to_string(), "Invalid input: missing title parameter");
    }

    #[test]
    fn test_error_display_parse() {
        let error = SpectraError::Parse("invalid selector 'p..name'".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to parse HTML: invalid selector 'p..name'"
        );
    }

    #[test]
    fn test_error_classification() {
        let error = SpectraError::NotFound("video url".to_string());
        assert!(error.is_not_found());
        assert!(!error.is_transport());

        let error = SpectraError::InvalidInput("episode_url".to_string());
        assert!(!error.is_not_found());
        assert!(!error.is_transport());
    }

    #[test]
    fn test_error_serialize() {
        let error = SpectraError::NotFound("video url".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Not found: video url\"");
    }

    #[test]
    fn test_error_serialize_invalid_input() {
        let error = SpectraError::InvalidInput("missing episode_url".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Invalid input: missing episode_url\"");
    }
}
