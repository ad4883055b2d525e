//! Per-user config file location, resolved from the host platform and
//! environment.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::StorageUnavailable;

/// File name of the persisted config document.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Resolve the config file path, ensuring its directory chain exists.
/// The file itself is not created.
pub fn config_file() -> Result<PathBuf, StorageUnavailable> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Platform-appropriate config directory for the application, created
/// if needed. Creation is idempotent.
pub fn config_dir() -> Result<PathBuf, StorageUnavailable> {
    let dir = platform_config_dir();
    fs::create_dir_all(&dir).map_err(|source| StorageUnavailable {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

#[cfg(target_os = "macos")]
fn platform_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Cyclops")
}

#[cfg(target_os = "windows")]
fn platform_config_dir() -> PathBuf {
    env::var_os("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(home_dir)
        .join("Cyclops")
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_config_dir() -> PathBuf {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => home_dir().join(".config"),
    };
    base.join("cyclops")
}

/// User home directory from the environment. Falls back to the current
/// directory when unset so resolution stays total.
fn home_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    let home = env::var_os("USERPROFILE");
    #[cfg(not(target_os = "windows"))]
    let home = env::var_os("HOME");

    home.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."))
}
