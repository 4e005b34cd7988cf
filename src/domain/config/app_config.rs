use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{AppError, Locale};

/// Settings read from `promptgen.toml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub defaults: DefaultsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Locale used when the command line does not name one.
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory that receives exported `generated_prompt_<locale>.txt` files.
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { directory: PathBuf::from(".") }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.output.directory.as_os_str().is_empty() {
            return Err(AppError::config_error("output.directory must not be empty"));
        }
        Ok(())
    }
}
