use crate::error::{GhostError, Result};
use crate::exec::run_shell;
use crate::packages::{ensure_requirements, install_via_system_managers};
use crate::registry::{fetch_package, report_missing};
use crate::ui as output;

pub struct InstallOptions {
    pub name: String,
}

pub fn run(options: InstallOptions) -> Result<()> {
    let package = match fetch_package(&options.name) {
        Ok(package) => package,
        Err(fetch_error) => return recover_via_system_managers(&options.name, fetch_error),
    };

    output::info(&format!("Package found: {}", package.name));
    ensure_requirements(&package.requirements)?;

    output::info(&format!("Executing command: {}", package.command));
    run_shell(&package.command)?;

    output::success("Package installed successfully.");
    Ok(())
}

/// Fallback for a failed registry lookup: hand the name to the system
/// package managers, and if they cannot install it either, report the
/// request to the registry and surface the original lookup error.
fn recover_via_system_managers(name: &str, fetch_error: GhostError) -> Result<()> {
    match &fetch_error {
        GhostError::PackageNotFound(_) => {
            output::warning(&format!(
                "Package not found: {}. Trying system package managers...",
                name
            ));
        }
        other => {
            output::warning(&format!("{}", other));
            output::info("Trying system package managers...");
        }
    }

    match install_via_system_managers(name) {
        Ok(()) => Ok(()),
        Err(GhostError::Interrupted) => Err(GhostError::Interrupted),
        Err(manager_error) => {
            output::warning(&format!("System package managers failed: {}", manager_error));
            match report_missing(name) {
                Ok(()) => output::info("Package request reported to the registry."),
                Err(report_error) => {
                    output::warning(&format!("Could not report the request: {}", report_error));
                }
            }
            Err(fetch_error)
        }
    }
}
