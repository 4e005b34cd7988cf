//! Writing, exporting and copying a generated prompt.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::generate::GeneratedPrompt;
use crate::domain::{AppError, ExportFile};
use crate::ports::ClipboardWriter;

#[derive(Debug, Clone, Default)]
pub struct DeliveryOptions {
    /// Write the prompt to this file.
    pub output: Option<PathBuf>,
    /// Write `generated_prompt_<locale>.txt` into this directory.
    pub export_dir: Option<PathBuf>,
    /// Copy the prompt to the clipboard.
    pub copy: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub written: Option<PathBuf>,
    pub exported: Option<PathBuf>,
    pub copied: bool,
}

/// Write an export file into `dir`, creating the directory when missing.
pub fn write_export(dir: &Path, file: &ExportFile) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(&file.file_name);
    fs::write(&path, &file.contents)?;
    info!(path = %path.display(), mime = file.mime, "exported prompt");
    Ok(path)
}

pub fn deliver<C: ClipboardWriter>(
    prompt: &GeneratedPrompt,
    options: &DeliveryOptions,
    clipboard: &mut C,
) -> Result<DeliveryReport, AppError> {
    let mut report = DeliveryReport::default();

    if let Some(path) = &options.output {
        fs::write(path, &prompt.content)?;
        info!(path = %path.display(), "wrote prompt");
        report.written = Some(path.clone());
    }
    if let Some(dir) = &options.export_dir {
        report.exported = Some(write_export(dir, &prompt.export_file())?);
    }
    if options.copy {
        clipboard.write_text(&prompt.content)?;
        report.copied = true;
    }

    Ok(report)
}
