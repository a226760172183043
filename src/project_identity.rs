//! Project-wide identity and endpoint constants.
//!
//! Every remote endpoint can be overridden through a `GHOST_*` environment
//! variable, which the integration tests use to point the binary at local
//! mock servers.

use std::env;

pub const DISPLAY_NAME: &str = "Ghost";
pub const BINARY_NAME: &str = "ghost";
pub const ENV_PREFIX: &str = "GHOST";

/// Base URL under which package descriptors live as `<name>.json`.
const DEFAULT_REGISTRY_URL: &str = "https://ghost.yusiqo.com/pkgs";

/// Endpoint that records requests for packages the registry does not carry.
const DEFAULT_REQUEST_URL: &str = "https://ghost.yusiqo.com/request.php";

/// Plaintext file holding the latest published version string.
const DEFAULT_VERSION_URL: &str =
    "https://raw.githubusercontent.com/yusiqo/ghost/refs/heads/main/version";

/// Prebuilt binary for the latest release.
const DEFAULT_LATEST_URL: &str =
    "https://github.com/yusiqo/ghost/releases/latest/download/ghost";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

fn env_or(suffix: &str, default: &str) -> String {
    env::var(env_key(suffix)).unwrap_or_else(|_| default.to_string())
}

pub fn registry_base_url() -> String {
    env_or("REGISTRY_URL", DEFAULT_REGISTRY_URL)
}

pub fn request_endpoint_url() -> String {
    env_or("REQUEST_URL", DEFAULT_REQUEST_URL)
}

pub fn version_url() -> String {
    env_or("VERSION_URL", DEFAULT_VERSION_URL)
}

pub fn latest_binary_url() -> String {
    env_or("LATEST_URL", DEFAULT_LATEST_URL)
}

/// URL of the descriptor for `name` under `base`.
pub fn package_descriptor_url(base: &str, name: &str) -> String {
    format!("{}/{}.json", base.trim_end_matches('/'), name)
}

pub fn user_agent() -> String {
    format!("{}-cli", BINARY_NAME)
}
