use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// In-memory clipboard for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockClipboard {
    pub writes: Vec<String>,
    pub should_fail: bool,
}

#[allow(dead_code)]
impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { should_fail: true, ..Self::default() }
    }

    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::ClipboardError("Mock clipboard error".to_string()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
