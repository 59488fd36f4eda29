//! Canonical resolve output helper.
//!
//! Writes compact single-line JSON to stdout on success, and optionally
//! appends `settings=<...>` to `GITHUB_OUTPUT` when set.

use std::io::Write;

use serde::Serialize;

use crate::domain::{AppError, LaunchSettings};

/// Schema version of the resolve report.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Machine-readable view of resolved settings, safe to publish as a step
/// output: it never carries the token or the key material, only the key
/// file's path.
#[derive(Debug, Serialize)]
pub struct ResolveReport {
    pub schema_version: u32,
    pub repositories: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_conf: Option<String>,
    pub repos_file: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_key_file: Option<String>,
}

impl ResolveReport {
    /// Build the publishable view of resolved settings.
    pub fn from_settings(settings: &LaunchSettings) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            repositories: settings.repositories.clone(),
            repo_conf: settings.repo_conf.as_ref().map(|path| path.display().to_string()),
            repos_file: settings.repos_file.is_some(),
            app_id: settings.github_app.as_ref().map(|app| app.app_id.clone()),
            app_key_file: settings
                .github_app
                .as_ref()
                .map(|app| app.key_file.display().to_string()),
        }
    }
}

/// Write the resolve report in canonical format.
///
/// - Writes compact single-line JSON to stdout.
/// - Appends `settings=<same JSON>` to the `GITHUB_OUTPUT` file if the env
///   var is set.
///
/// # Errors
/// Returns an error if JSON serialization fails or file I/O fails.
pub fn write_resolve_output(report: &ResolveReport) -> Result<(), AppError> {
    let json = serde_json::to_string(report)
        .map_err(|e| AppError::Internal(format!("Failed to serialize resolve report: {}", e)))?;

    debug_assert!(!json.contains('\n'), "resolve report JSON must be single-line");

    println!("{}", json);

    if let Ok(path) = std::env::var("GITHUB_OUTPUT") {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| AppError::Internal(format!("Failed to open GITHUB_OUTPUT: {}", e)))?;

        // Value must not contain newlines (enforced above).
        writeln!(file, "settings={}", json)
            .map_err(|e| AppError::Internal(format!("Failed to write GITHUB_OUTPUT: {}", e)))?;
    }

    Ok(())
}
