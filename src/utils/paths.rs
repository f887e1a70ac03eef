use crate::constants::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, PROJECT_NAME, PROJECT_ORG, PROJECT_QUALIFIER};
use crate::error::{RelxError, Result};
use directories::{ProjectDirs, UserDirs};
use std::path::{Path, PathBuf};

pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let user_dirs = UserDirs::new()
        .ok_or_else(|| RelxError::Other("Could not determine user home directory".to_string()))?;
    let home = user_dirs.home_dir();

    if path_str == "~" {
        return Ok(home.to_path_buf());
    }

    let stripped = path_str
        .strip_prefix("~/")
        .ok_or_else(|| RelxError::Other(format!("Invalid path format: {}", path_str)))?;

    Ok(home.join(stripped))
}

pub fn config_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORG, PROJECT_NAME)
        .ok_or_else(|| RelxError::Other("Could not determine config directory".to_string()))?;
    Ok(proj.config_dir().to_path_buf())
}

pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Config location: `--config` first, then `RELX_CONFIG`, then the
/// platform config directory. The boolean is true when the path was asked
/// for explicitly and must therefore exist.
pub fn resolve_config_file(explicit: Option<&Path>) -> Result<(PathBuf, bool)> {
    if let Some(path) = explicit {
        return Ok((expand_home(path)?, true));
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok((expand_home(Path::new(&path))?, true));
    }
    Ok((config_file()?, false))
}
