//! Client for the package registry.
//!
//! The registry is a static file tree: the descriptor for package `name`
//! lives at `<base>/<name>.json`. A companion endpoint accepts POSTed
//! reports for packages the registry does not carry, so missing names can
//! be queued for packaging.

use crate::error::{GhostError, Result};
use crate::project_identity;
use crate::ui as output;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const HTTP_TIMEOUT_SECS: u64 = 10;

/// Package descriptor as served by the registry.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    /// Shell command that performs the installation.
    pub command: String,
    /// Executables that must be on PATH before `command` runs.
    #[serde(default)]
    pub requirements: Vec<String>,
}

#[derive(Serialize)]
struct MissingReport<'a> {
    name: &'a str,
}

fn http_client() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(project_identity::user_agent())
        .build()
        .map_err(|e| GhostError::RemoteFetchError(e.to_string()))
}

/// Fetch and parse the descriptor for `name`.
///
/// A 404 from the registry means the package does not exist there; any
/// other non-success status is a fetch error.
pub fn fetch_package(name: &str) -> Result<Package> {
    let url = project_identity::package_descriptor_url(&project_identity::registry_base_url(), name);
    output::verbose(&format!("GET {}", url));

    let response = http_client()?
        .get(&url)
        .send()
        .map_err(|e| GhostError::RemoteFetchError(e.to_string()))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(GhostError::PackageNotFound(name.to_string()));
    }
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
    parse_descriptor(name, &body)
}

pub(crate) fn parse_descriptor(name: &str, body: &str) -> Result<Package> {
    serde_json::from_str(body).map_err(|e| GhostError::DescriptorParseError {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Report `name` to the request endpoint so it can be considered for
/// packaging. The endpoint expects a JSON body of the form `{"name": ...}`.
pub fn report_missing(name: &str) -> Result<()> {
    let url = project_identity::request_endpoint_url();
    let payload = serde_json::to_string(&MissingReport { name })?;
    output::verbose(&format!("POST {}", url));

    let response = http_client()?
        .post(&url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(payload)
        .send()
        .map_err(|e| GhostError::RemoteFetchError(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().unwrap_or_default();
        return Err(GhostError::RemoteFetchError(format!(
            "request endpoint returned {}: {}",
            status,
            body.trim()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
