use anyhow::Result;
use std::path::PathBuf;

const LOG_FOLDER_NAME: &str = "Donation_Form_Log";

/// Resolve deployment folder (absolute path)
pub fn resolve_deployment_folder() -> PathBuf {
    // Prefer the folder where the binary is running from
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(dir) = exe_path.parent() {
            return dir.to_path_buf();
        }
    }

    // Fallback: current working directory
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve log folder (absolute path)
///
/// Order: explicit override, an existing `Donation_Form_Log/` in the working
/// directory or one of its parents, the per-user data dir, the deployment folder.
pub fn resolve_log_folder(override_dir: Option<&std::path::Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        std::fs::create_dir_all(dir)
            .map_err(|e| anyhow::anyhow!("Failed to create log folder {:?}: {}", dir, e))?;
        return Ok(dir.to_path_buf());
    }

    if let Ok(mut dir) = std::env::current_dir() {
        for _ in 0..12 {
            let candidate = dir.join(LOG_FOLDER_NAME);
            if candidate.is_dir() {
                return Ok(candidate);
            }
            if let Some(parent) = dir.parent() {
                dir = parent.to_path_buf();
            } else {
                break;
            }
        }
    }

    let base = dirs::data_local_dir()
        .map(|d| d.join("donation-form"))
        .unwrap_or_else(resolve_deployment_folder);
    let log_dir = base.join(LOG_FOLDER_NAME);
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create log folder: {}", e))?;
    Ok(log_dir)
}
