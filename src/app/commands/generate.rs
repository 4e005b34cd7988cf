//! Building a FieldSet from command-line input and generating the prompt.

use std::io;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::domain::{ActionKind, ActionStep, AppError, ExportFile, FieldSet, Locale, generate};
use crate::services::{read_fields_file, read_fields_json};

/// Where the base field values come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldsSource {
    /// Start from an empty FieldSet.
    Empty,
    /// JSON on stdin.
    Stdin,
    /// A `.json`, `.yaml`, `.yml` or `.toml` file.
    File(PathBuf),
}

impl FieldsSource {
    /// `-` means stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            None => FieldsSource::Empty,
            Some(path) if path.as_os_str() == "-" => FieldsSource::Stdin,
            Some(path) => FieldsSource::File(path),
        }
    }
}

/// Inputs to one `generate` invocation.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub locale: Locale,
    pub source: FieldsSource,
    /// `key=value` overrides applied after the source is read.
    pub assignments: Vec<String>,
    /// `kind=value` steps appended after the source's actions.
    pub actions: Vec<String>,
}

/// A rendered prompt and the locale it was rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPrompt {
    pub locale: Locale,
    pub content: String,
}

impl GeneratedPrompt {
    pub fn render(fields: &FieldSet, locale: Locale) -> Self {
        Self { locale, content: generate(fields, locale) }
    }

    pub fn export_file(&self) -> ExportFile {
        ExportFile::new(self.locale, self.content.clone())
    }
}

/// Split `key=value` at the first `=`.
pub fn parse_assignment(raw: &str) -> Result<(&str, &str), AppError> {
    raw.split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .map(|(key, value)| (key.trim(), value))
        .ok_or_else(|| AppError::InvalidAssignment(raw.to_string()))
}

/// Parse `kind=value`; anything else is a `Search` step holding the whole text.
pub fn parse_action(raw: &str) -> Result<ActionStep, AppError> {
    if let Some((prefix, value)) = raw.split_once('=') {
        match prefix.parse::<ActionKind>() {
            Ok(kind) => return Ok(ActionStep::new(kind, value)),
            Err(_) => debug!(prefix, "no action kind before '=', treating as search text"),
        }
    }
    Ok(ActionStep::new(ActionKind::default(), raw))
}

fn read_source(source: &FieldsSource) -> Result<FieldSet, AppError> {
    match source {
        FieldsSource::Empty => Ok(FieldSet::new()),
        FieldsSource::Stdin => read_fields_json(io::stdin().lock()),
        FieldsSource::File(path) => read_fields_file(path),
    }
}

/// Merge the source, assignments and extra actions into one FieldSet.
pub fn build_fields(request: &GenerateRequest) -> Result<FieldSet, AppError> {
    let mut fields = read_source(&request.source)?;

    for raw in &request.assignments {
        let (key, value) = parse_assignment(raw)?;
        if !fields.apply(key, value) {
            warn!(key, "ignoring unrecognized field");
        }
    }
    for raw in &request.actions {
        fields.action.push(parse_action(raw)?);
    }

    debug!(actions = fields.action.len(), "built field set");
    Ok(fields)
}

pub fn execute(request: &GenerateRequest) -> Result<GeneratedPrompt, AppError> {
    let fields = build_fields(request)?;
    Ok(GeneratedPrompt::render(&fields, request.locale))
}
