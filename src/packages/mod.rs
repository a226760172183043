//! System package manager fallback chain.
//!
//! When a requirement is missing or the registry has no descriptor, the
//! supported system managers are tried in order of preference. Each
//! available manager gets a chance; the first successful install wins.

mod apt;
mod traits;
mod yay;

pub use apt::Apt;
pub use traits::SystemManager;
pub use yay::Yay;

use crate::error::{GhostError, Result};
use crate::ui as output;

/// Supported managers in preference order.
pub fn system_managers() -> Vec<Box<dyn SystemManager>> {
    vec![Box::new(Yay), Box::new(Apt)]
}

/// Whether `executable` resolves on the current PATH.
pub fn is_on_path(executable: &str) -> bool {
    which::which(executable).is_ok()
}

/// Try to install `package` with each available system manager until one
/// succeeds.
pub fn install_via_system_managers(package: &str) -> Result<()> {
    let managers = system_managers();

    if !managers.iter().any(|m| m.is_available()) {
        output::warning("No supported system package manager found (checked yay, apt).");
        return Err(GhostError::PackageManagerError(
            "neither yay nor apt is available".to_string(),
        ));
    }

    let mut last_error = None;
    for manager in &managers {
        if !manager.is_available() {
            continue;
        }
        output::info(&format!("Trying to install '{}' with {}...", package, manager.name()));
        match manager.install(package) {
            Ok(()) => {
                output::success(&format!("'{}' installed with {}.", package, manager.name()));
                return Ok(());
            }
            Err(_) if output::is_interrupted() => return Err(GhostError::Interrupted),
            Err(e) => {
                output::warning(&format!("{} did not succeed: {}", manager.name(), e));
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        GhostError::PackageManagerError(format!("no system manager could install '{}'", package))
    }))
}

/// Make sure every executable in `requirements` is on PATH, installing the
/// missing ones through the system managers.
pub fn ensure_requirements(requirements: &[String]) -> Result<()> {
    for requirement in requirements {
        if is_on_path(requirement) {
            output::verbose(&format!("Requirement '{}' already present.", requirement));
            continue;
        }
        output::info(&format!("Requirement '{}' not found. Installing...", requirement));
        install_via_system_managers(requirement).map_err(|e| match e {
            GhostError::Interrupted => GhostError::Interrupted,
            other => GhostError::RequirementInstall {
                requirement: requirement.clone(),
                reason: other.to_string(),
            },
        })?;
    }
    Ok(())
}
