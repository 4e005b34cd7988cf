use super::locale::Locale;

/// MIME type of exported prompts.
pub const EXPORT_MIME: &str = "text/plain";

/// A generated prompt packaged for download-style delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime: &'static str,
    pub contents: String,
}

impl ExportFile {
    pub fn new(locale: Locale, contents: impl Into<String>) -> Self {
        Self { file_name: export_file_name(locale), mime: EXPORT_MIME, contents: contents.into() }
    }
}

/// `generated_prompt_<locale>.txt`
pub fn export_file_name(locale: Locale) -> String {
    format!("generated_prompt_{}.txt", locale.code())
}
