use crate::error::Result;

/// A system package manager that can satisfy a missing requirement.
///
/// Managers run in the foreground with inherited stdio so the user sees
/// their normal prompts (sudo password, AUR build questions).
pub trait SystemManager {
    /// Short name used in status messages.
    fn name(&self) -> &'static str;

    /// Whether the manager's executable is present on this host.
    fn is_available(&self) -> bool;

    /// Install `package`, blocking until the manager exits.
    fn install(&self, package: &str) -> Result<()>;
}
