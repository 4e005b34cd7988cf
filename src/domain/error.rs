use std::io;

use thiserror::Error;

/// Library-wide error type for promptgen operations.
///
/// Prompt assembly itself never fails; these errors come from the layers
/// that gather input and deliver output.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Locale tag outside the supported set.
    #[error("Unsupported locale '{0}': must be one of en, zh")]
    UnsupportedLocale(String),

    /// Action kind outside the supported set.
    #[error("Invalid action kind '{0}': must be one of Search, Lookup, Browse")]
    InvalidActionKind(String),

    /// Command-line assignment without a `=` separator.
    #[error("Invalid assignment '{0}': expected KEY=VALUE")]
    InvalidAssignment(String),

    /// Fields file with an extension we cannot read.
    #[error("Unsupported fields file '{0}': expected .json, .yaml, .yml or .toml")]
    UnsupportedFieldsFormat(String),

    /// File not found at path.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Interactive prompt failed.
    #[error("Prompt error: {0}")]
    PromptError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }
}
