//! Reachability probe over blocking reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::HttpProbe;

const PROBE_TIMEOUT_SECS: u64 = 30;

/// Blocking HTTP probe that reports only whether a GET succeeded.
///
/// One request per call, bounded by a client-level timeout. Retry behavior
/// is deliberately absent; callers treat any failure as fatal.
#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    client: Client,
}

impl ReqwestProbe {
    /// Create a probe with a bounded request timeout.
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpProbe for ReqwestProbe {
    fn get_ok(&self, url: &str) -> Result<bool, AppError> {
        let url = Url::parse(url)
            .map_err(|e| AppError::InvalidUrl { url: url.to_string(), details: e.to_string() })?;

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::Http(format!("GET request failed: {}", e)))?;

        Ok(response.status().is_success())
    }
}
