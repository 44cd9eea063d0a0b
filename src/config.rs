//! Configuration management for shrtcli.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use dotenv;
use std::{env, path::PathBuf, time::Duration};

/// Backend origin used when `SHRT_SERVICE_URL` is unset.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080";

/// Bind address of `shrtcli serve` when `SHRT_SERVER_ADDRESS` is unset.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";

/// Upper bound for every call to the shortening service.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(5000);

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives under `shrtcli/.env` in the platform-specific local data
/// directory:
/// - Linux: `~/.local/share/shrtcli/.env`
/// - macOS: `~/Library/Application Support/shrtcli/.env`
/// - Windows: `%LOCALAPPDATA%/shrtcli/.env`
///
/// A missing file is fine, every setting has a default. Variables already
/// present in the process environment are not overridden.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("shrtcli/.env");
    path
}

/// Returns the base address of the shortening service.
///
/// Reads `SHRT_SERVICE_URL` and falls back to [`DEFAULT_SERVICE_URL`]. Blank
/// values count as unset.
///
/// # Example
///
/// ```
/// let base = service_url(); // e.g., "https://sho.rt"
/// ```
pub fn service_url() -> String {
    non_empty_var("SHRT_SERVICE_URL").unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string())
}

/// Returns the address the local web front end binds to.
pub fn server_addr() -> String {
    non_empty_var("SHRT_SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
