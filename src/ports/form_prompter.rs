use crate::domain::AppError;

/// Texts shown when asking for one free-text field.
#[derive(Debug, Clone, Copy)]
pub struct TextQuestion<'a> {
    pub label: &'a str,
    pub hint: &'a str,
    pub help: &'a str,
}

/// Port for interactive form input.
///
/// Every method returns `Ok(None)` when the user cancels.
pub trait FormPrompter {
    /// Show a section heading.
    fn heading(&mut self, title: &str);

    /// Ask for a possibly-empty line of text.
    fn text(&mut self, question: TextQuestion<'_>) -> Result<Option<String>, AppError>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>, AppError>;

    /// Pick one of `items`, returning its index.
    fn select(
        &mut self,
        prompt: &str,
        items: &[&str],
        default: usize,
    ) -> Result<Option<usize>, AppError>;
}
