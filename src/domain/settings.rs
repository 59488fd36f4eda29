//! Resolved launch-setting domain models.

use std::fmt;
use std::path::PathBuf;

/// GitHub App identity resolved from action inputs.
///
/// The private key has already been materialized at `key_file` by the time
/// this value exists. The file is never cleaned up by the resolver; the
/// process that launches the update tool owns it from here on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubAppCredentials {
    /// Numeric App identifier, kept as the raw input string.
    pub app_id: String,
    /// Path to the freshly written PEM file.
    pub key_file: PathBuf,
}

/// Full set of resolved settings consumed by the workflow launcher.
#[derive(Clone)]
pub struct LaunchSettings {
    /// API token, verbatim from the `github-token` input.
    pub github_token: String,
    /// Repo-level config override, when one exists on disk.
    pub repo_conf: Option<PathBuf>,
    /// Newline-joined `- repo[:branch]` selector block.
    pub repositories: String,
    /// Raw bytes of the optional multi-repository manifest.
    pub repos_file: Option<Vec<u8>>,
    /// GitHub App credentials, when App auth is configured.
    pub github_app: Option<GitHubAppCredentials>,
}

impl fmt::Debug for LaunchSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaunchSettings")
            .field("github_token", &"[REDACTED]")
            .field("repo_conf", &self.repo_conf)
            .field("repositories", &self.repositories)
            .field("repos_file", &self.repos_file.as_ref().map(|b| format!("{} bytes", b.len())))
            .field("github_app", &self.github_app)
            .finish()
    }
}

/// Split a comma-separated branch list, dropping empty segments.
///
/// Order is preserved and entries are not deduplicated. Segments are not
/// trimmed: the input provider already strips surrounding whitespace from
/// the whole value, not from individual entries.
pub fn parse_branches(raw: &str) -> Vec<&str> {
    raw.split(',').filter(|segment| !segment.is_empty()).collect()
}

/// Render the `- repo[:branch]` selector block the update tool consumes.
///
/// One line per branch when branches are given; a single bare line otherwise.
pub fn repository_lines(repository: &str, branches: &[&str]) -> String {
    if branches.is_empty() {
        format!("- {}", repository)
    } else {
        branches
            .iter()
            .map(|branch| format!("- {}:{}", repository, branch))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
