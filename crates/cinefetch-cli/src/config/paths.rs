//! Config file location.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cinefetch_db::{AppDir, app_dir};

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Resolves the config file path: `{dir}/config.toml`, or `config.toml`
/// in the per-user config directory (`$XDG_CONFIG_HOME/cinefetch`,
/// `~/.config/cinefetch`).
///
/// # Errors
///
/// Returns an error if no config directory can be determined.
pub fn resolve_config_path(dir: Option<&Path>) -> Result<PathBuf> {
    let config_dir = app_dir(dir, AppDir::Config).context("failed to locate config directory")?;
    Ok(config_dir.join(CONFIG_FILE))
}
