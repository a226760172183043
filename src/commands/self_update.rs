use crate::error::{GhostError, Result};
use crate::project_identity;
use crate::ui as output;
use crate::utils::update_check::{current_version, fetch_published_version, is_update_available};
use reqwest::blocking::Client;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

const DOWNLOAD_TIMEOUT_SECS: u64 = 60;

pub struct SelfUpdateOptions {
    pub check: bool,
}

pub fn run(options: SelfUpdateOptions) -> Result<()> {
    let current = current_version();
    let published = fetch_published_version()?;

    if !is_update_available(current, &published) {
        output::success(&format!(
            "{} is already up to date ({}).",
            project_identity::DISPLAY_NAME,
            current
        ));
        return Ok(());
    }

    if options.check {
        output::warning(&format!("Update available: {} -> {}", current, published));
        return Ok(());
    }

    output::info(&format!(
        "A new version is available: {}. Updating...",
        published
    ));
    replace_running_binary()?;
    output::success("Update completed.");
    Ok(())
}

/// Download the released binary into a staging directory and swap it in
/// over the running executable. The staging directory is removed whether
/// or not the swap succeeds.
fn replace_running_binary() -> Result<()> {
    let staging = env::temp_dir().join(format!("ghost-self-update-{}", std::process::id()));
    let _ = fs::remove_dir_all(&staging);
    fs::create_dir_all(&staging)?;

    let result = download_and_install(&staging);
    let _ = fs::remove_dir_all(&staging);
    result
}

fn download_and_install(staging: &Path) -> Result<()> {
    let staged_bin = staging.join(project_identity::BINARY_NAME);

    let url = project_identity::latest_binary_url();
    output::info(&format!("Downloading {}...", url));
    download_file(&url, &staged_bin)?;

    let current_exe = env::current_exe()
        .map_err(|e| GhostError::Other(format!("Unable to locate current executable: {}", e)))?;
    install_binary(&staged_bin, &current_exe)
}

fn download_file(url: &str, path: &Path) -> Result<()> {
    let client = Client::builder()
        .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
        .user_agent(project_identity::user_agent())
        .build()
        .map_err(|e| GhostError::RemoteFetchError(e.to_string()))?;
    let response = client
        .get(url)
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
        .bytes()
        .map_err(|e| GhostError::RemoteFetchError(e.to_string()))?;
    fs::write(path, &body)?;
    Ok(())
}

/// Put `new_bin` where `current_exe` lives, escalating through sudo when
/// the install directory is not writable.
fn install_binary(new_bin: &Path, current_exe: &Path) -> Result<()> {
    let dest_dir = current_exe.parent().ok_or_else(|| {
        GhostError::Other(format!(
            "Cannot resolve install directory for {}",
            current_exe.display()
        ))
    })?;

    if dest_dir_is_writable(dest_dir) {
        // Stage next to the target and rename over it. Writing the running
        // executable in place fails with ETXTBSY on Linux, and a rename
        // only works within one filesystem.
        let staged = dest_dir.join(format!(
            ".{}-update-{}",
            project_identity::BINARY_NAME,
            std::process::id()
        ));
        fs::copy(new_bin, &staged)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&staged, fs::Permissions::from_mode(0o755))?;
        }
        if let Err(e) = fs::rename(&staged, current_exe) {
            let _ = fs::remove_file(&staged);
            return Err(e.into());
        }
        return Ok(());
    }

    let status = Command::new("sudo")
        .arg("install")
        .arg("-m")
        .arg("755")
        .arg(new_bin)
        .arg(current_exe)
        .status()
        .map_err(|e| GhostError::SystemCommandFailed {
            command: format!(
                "sudo install -m 755 {} {}",
                new_bin.display(),
                current_exe.display()
            ),
            reason: e.to_string(),
        })?;
    if !status.success() {
        return Err(GhostError::Other(
            "Failed to install updated binary with sudo".to_string(),
        ));
    }
    Ok(())
}

fn dest_dir_is_writable(dir: &Path) -> bool {
    let probe = dir.join(".ghost-write-check");
    let created = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&probe)
        .is_ok();
    let _ = fs::remove_file(probe);
    created
}
