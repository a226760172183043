use crate::error::{GhostError, Result};
use crate::packages::traits::SystemManager;
use std::process::{Command, Stdio};

/// Debian/Ubuntu package manager, driven through sudo.
pub struct Apt;

impl SystemManager for Apt {
    fn name(&self) -> &'static str {
        "apt"
    }

    fn is_available(&self) -> bool {
        which::which("apt").is_ok()
    }

    fn install(&self, package: &str) -> Result<()> {
        let status = Command::new("sudo")
            .arg("apt")
            .arg("install")
            .arg("-y")
            .arg(package)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| GhostError::SystemCommandFailed {
                command: format!("sudo apt install -y {}", package),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(GhostError::PackageManagerError(format!(
                "apt failed to install '{}'",
                package
            )));
        }
        Ok(())
    }
}
