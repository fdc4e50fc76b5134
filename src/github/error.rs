//! Error types exposed by the GitHub gateway layer.

use thiserror::Error;

/// Errors surfaced while validating identifiers or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// An owner, organization, or repository identifier was blank.
    #[error("repository identifiers must not be empty")]
    MissingPathSegments,

    /// An identifier holds characters GitHub does not allow in owner or
    /// repository names.
    #[error("invalid repository identifier: {value}")]
    InvalidIdentifier {
        /// The rejected identifier.
        value: String,
    },

    /// A URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was missing or rejected by GitHub.
    #[error("GitHub rejected the request credentials: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// The requested repository, organization, or commit does not exist.
    #[error("GitHub resource not found: {message}")]
    NotFound {
        /// Response detail naming the missing resource.
        message: String,
    },

    /// GitHub returned another API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
