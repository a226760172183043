use crate::error::{GhostError, Result};
use crate::packages::traits::SystemManager;
use std::process::{Command, Stdio};

/// AUR helper. Preferred when present since it covers both the official
/// repos and the AUR.
pub struct Yay;

impl SystemManager for Yay {
    fn name(&self) -> &'static str {
        "yay"
    }

    fn is_available(&self) -> bool {
        which::which("yay").is_ok()
    }

    fn install(&self, package: &str) -> Result<()> {
        let status = Command::new("yay")
            .arg("-S")
            .arg(package)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| GhostError::SystemCommandFailed {
                command: format!("yay -S {}", package),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(GhostError::PackageManagerError(format!(
                "yay failed to install '{}'",
                package
            )));
        }
        Ok(())
    }
}
