//! Per-user application directories shared by the store and the CLI config.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Directory name under the XDG base directories.
const APP_NAME: &str = "cinefetch";

/// Which XDG base directory to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
    /// `$XDG_CONFIG_HOME/cinefetch`, else `~/.config/cinefetch`.
    Config,
    /// `$XDG_DATA_HOME/cinefetch`, else `~/.local/share/cinefetch`.
    Data,
}

impl AppDir {
    const fn xdg_var(self) -> &'static str {
        match self {
            Self::Config => "XDG_CONFIG_HOME",
            Self::Data => "XDG_DATA_HOME",
        }
    }

    const fn home_suffix(self) -> &'static [&'static str] {
        match self {
            Self::Config => &[".config"],
            Self::Data => &[".local", "share"],
        }
    }
}

/// Resolves the application directory from the process environment.
///
/// An explicit `dir` wins; it is used as-is without the app name appended.
///
/// # Errors
///
/// Returns an error if neither the XDG variable nor `HOME` is set.
pub fn app_dir(dir: Option<&Path>, kind: AppDir) -> Result<PathBuf> {
    resolve(dir, kind, |name| std::env::var(name).ok())
}

fn resolve(
    dir: Option<&Path>,
    kind: AppDir,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.to_path_buf());
    }

    // Relative XDG values are invalid and ignored.
    if let Some(base) = lookup(kind.xdg_var()).map(PathBuf::from)
        && base.is_absolute()
    {
        return Ok(base.join(APP_NAME));
    }

    let Some(home) = lookup("HOME").filter(|h| !h.is_empty()) else {
        bail!("neither {} nor HOME is set", kind.xdg_var());
    };
    let mut path = PathBuf::from(home);
    path.extend(kind.home_suffix());
    Ok(path.join(APP_NAME))
}
