use std::io;

use thiserror::Error;

/// Library-wide error type for upbot-action operations.
///
/// Every resolution failure is fatal for the configuration-assembly phase;
/// the message is surfaced verbatim and the run aborts.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Maven Central could not be reached or answered with a non-success status.
    #[error("Maven Central is not reachable from this runner: {details}")]
    MavenCentralUnreachable { details: String },

    /// A required action input was left empty.
    #[error("Missing required input '{0}'")]
    MissingInput(&'static str),

    /// Explicitly provided repo config path points at a missing file.
    #[error("Provided repo config file '{0}' does not exist")]
    RepoConfNotFound(String),

    /// No repository identifier from the input or the environment fallback.
    #[error(
        "Unable to determine the repository to update. Set the 'github-repository' input or the GITHUB_REPOSITORY environment variable."
    )]
    MissingRepository,

    /// Non-empty repos-file input points at a missing file.
    #[error("Provided repos file '{0}' does not exist")]
    ReposFileNotFound(String),

    /// Exactly one of the GitHub App id/key pair was supplied.
    #[error("GitHub App authentication requires both 'github-app-id' and 'github-app-key' inputs")]
    IncompleteAppAuth,

    /// HTTP transport failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Endpoint URL could not be parsed.
    #[error("Invalid URL '{url}': {details}")]
    InvalidUrl { url: String, details: String },

    /// Internal invariant violation.
    #[error("{0}")]
    Internal(String),
}
