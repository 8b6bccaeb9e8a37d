//! Error types for the show search widget
//!
//! Provides one error enum with human-readable messages
//! and Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all showsearch operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum ShowSearchError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Catalog response body could not be decoded
    #[error("Failed to parse catalog response: {0}")]
    ParseError(String),

    /// Catalog answered 404 for the requested resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// Search query was empty or whitespace only
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// Show identifier could not be resolved from the page
    #[error("Invalid show ID: {0}")]
    InvalidId(String),

    /// Click target selector could not be parsed
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Markup template failed to render
    #[error("Failed to render markup: {0}")]
    RenderError(#[from] askama::Error),
}

impl Serialize for ShowSearchError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for showsearch operations
pub type Result<T> = std::result::Result<T, ShowSearchError>;
