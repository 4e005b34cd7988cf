use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::AppError;
use crate::ports::{FormPrompter, TextQuestion};

/// Terminal form backed by dialoguer. Headings and hints go to stderr.
///
/// Esc cancels `confirm` and `select`. Text questions have no cancel key;
/// they return `None` only when the read is interrupted.
#[derive(Debug, Default)]
pub struct DialoguerFormPrompter;

impl DialoguerFormPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn interrupted<T>(result: Result<T, DialoguerError>, what: &str) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::PromptError(format!("Failed to read {}: {}", what, err))),
    }
}

fn flatten<T>(result: Result<Option<T>, DialoguerError>, what: &str) -> Result<Option<T>, AppError> {
    interrupted(result, what).map(Option::flatten)
}

impl FormPrompter for DialoguerFormPrompter {
    fn heading(&mut self, title: &str) {
        eprintln!("\n== {} ==", title);
    }

    fn text(&mut self, question: TextQuestion<'_>) -> Result<Option<String>, AppError> {
        eprintln!("  {}", question.help);
        eprintln!("  {}", question.hint);
        let result = Input::<String>::new()
            .with_prompt(question.label)
            .allow_empty(true)
            .interact_text();
        interrupted(result, question.label)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>, AppError> {
        flatten(Confirm::new().with_prompt(prompt).default(default).interact_opt(), prompt)
    }

    fn select(
        &mut self,
        prompt: &str,
        items: &[&str],
        default: usize,
    ) -> Result<Option<usize>, AppError> {
        flatten(Select::new().with_prompt(prompt).items(items).default(default).interact_opt(), prompt)
    }
}
