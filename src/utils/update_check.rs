//! Version comparison against the published release channel.
//!
//! The release channel is a plaintext file holding a single version
//! string. Comparison is plain string inequality after normalization, so
//! any published version that differs from the running one counts as an
//! update (including rollbacks).

use crate::error::{GhostError, Result};
use crate::project_identity;
use std::time::Duration;

const HTTP_TIMEOUT_SECS: u64 = 10;

pub fn current_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Fetch the published version string from the release channel.
pub fn fetch_published_version() -> Result<String> {
    let url = project_identity::version_url();
    let response = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(project_identity::user_agent())
        .build()
        .map_err(|e| GhostError::RemoteFetchError(e.to_string()))?
        .get(&url)
        .send()
        .map_err(|e| GhostError::RemoteFetchError(e.to_string()))?;

    if !response.status().is_success() {
        return Err(GhostError::RemoteFetchError(format!(
            "HTTP {} for {}",
            response.status(),
            url
        )));
    }

    let body = response
        .text()
        .map_err(|e| GhostError::RemoteFetchError(e.to_string()))?;
    Ok(normalize_version(&body))
}

/// Strip surrounding whitespace and a leading `v`.
pub fn normalize_version(raw: &str) -> String {
    raw.trim().trim_start_matches('v').to_string()
}

pub fn is_update_available(current: &str, published: &str) -> bool {
    normalize_version(current) != normalize_version(published)
}
