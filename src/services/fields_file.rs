//! Reading a FieldSet from JSON, YAML or TOML.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, FieldSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldsFormat {
    Json,
    Yaml,
    Toml,
}

impl FieldsFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(FieldsFormat::Json),
            Some("yaml" | "yml") => Ok(FieldsFormat::Yaml),
            Some("toml") => Ok(FieldsFormat::Toml),
            _ => Err(AppError::UnsupportedFieldsFormat(path.display().to_string())),
        }
    }
}

/// Parse fields content. `source` names the input in error messages.
pub fn parse_fields(content: &str, format: FieldsFormat, source: &str) -> Result<FieldSet, AppError> {
    if content.trim().is_empty() {
        return Ok(FieldSet::default());
    }
    match format {
        FieldsFormat::Json => {
            serde_json::from_str(content).map_err(|err| AppError::parse_error(source, err))
        }
        FieldsFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|err| AppError::parse_error(source, err))
        }
        FieldsFormat::Toml => {
            toml::from_str(content).map_err(|err| AppError::parse_error(source, err))
        }
    }
}

/// Read fields from a file; the format follows the extension.
pub fn read_fields_file(path: &Path) -> Result<FieldSet, AppError> {
    let format = FieldsFormat::from_path(path)?;
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), ?format, "read fields file");
    parse_fields(&content, format, &path.display().to_string())
}

/// Read JSON fields from any reader (stdin for `--fields -`).
pub fn read_fields_json<R: Read>(mut reader: R) -> Result<FieldSet, AppError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_fields(&content, FieldsFormat::Json, "stdin")
}
