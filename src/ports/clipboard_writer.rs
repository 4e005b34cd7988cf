use crate::domain::AppError;

/// Sink for `--copy`: receives the finished prompt exactly as printed.
pub trait ClipboardWriter {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}
