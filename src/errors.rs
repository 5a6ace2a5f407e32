/*!
 * Error types for the slideforge application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when calling the rewrite provider API.
///
/// Every variant is recoverable at the slide level: the reconstructor
/// substitutes diagnostic slide text instead of propagating these.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails (transport, timeout)
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication (missing or rejected credential)
    #[error("{0}")]
    AuthenticationError(String),
}

/// Errors that can occur while loading or saving a presentation document.
///
/// Unlike provider errors these are fatal for the whole run: a document
/// that cannot be parsed or serialized produces no partial output.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document bytes could not be parsed
    #[error("Failed to load presentation: {0}")]
    Load(String),

    /// The document could not be serialized
    #[error("Failed to save presentation: {0}")]
    Save(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the rewrite provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the presentation document
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
