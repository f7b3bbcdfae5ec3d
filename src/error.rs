//! Error types for label-automerge

use thiserror::Error;

/// Errors that can abort or degrade an automerge run
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing action input
    #[error("configuration error: {0}")]
    Config(String),

    /// Event payload or repository context could not be read
    #[error("event context error: {0}")]
    Event(String),

    /// GitHub API returned something we could not use
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Pull request has no body to build a commit message from
    #[error("pull request #{0} has no body")]
    MissingBody(u64),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;
