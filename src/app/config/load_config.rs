//! Configuration loading from `promptgen.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::config::paths::{CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use crate::domain::config::parse_config_content;
use crate::domain::{AppConfig, AppError};

/// Parsed configuration plus the file it came from, if any.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: Option<PathBuf>,
}

/// Pick the config file to read.
///
/// An explicit path or the environment variable must point at an existing
/// file; `promptgen.toml` in `cwd` is used only when present.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_value: Option<PathBuf>,
    cwd: &Path,
) -> Result<Option<PathBuf>, AppError> {
    if let Some(path) = explicit {
        return require_file(path.to_path_buf(), "--config");
    }
    if let Some(path) = env_value.filter(|path| !path.as_os_str().is_empty()) {
        return require_file(path, CONFIG_ENV_VAR);
    }
    let discovered = cwd.join(CONFIG_FILE_NAME);
    Ok(discovered.is_file().then_some(discovered))
}

fn require_file(path: PathBuf, origin: &str) -> Result<Option<PathBuf>, AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!(
            "Config file from {} not found: {}",
            origin,
            path.display()
        )));
    }
    Ok(Some(path))
}

/// Load configuration, falling back to built-in defaults when no file applies.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, AppError> {
    let env_value = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let Some(path) = resolve_config_path(explicit, env_value, cwd)? else {
        debug!("no config file, using defaults");
        return Ok(LoadedConfig::default());
    };

    let content = fs::read_to_string(&path)?;
    let mut config = parse_config_content(&content).map_err(|err| {
        AppError::config_error(format!("Invalid config {}: {}", path.display(), err))
    })?;

    // Relative output directories are relative to the config file.
    if config.output.directory.is_relative() {
        if let Some(parent) = path.parent() {
            config.output.directory = parent.join(&config.output.directory);
        }
    }
    debug!(path = %path.display(), "loaded config");
    Ok(LoadedConfig { config, source: Some(path) })
}
