use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::{FormPrompter, TextQuestion};

/// One scripted reply to a form question.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Answer {
    Text(String),
    Confirm(bool),
    Select(usize),
    /// Reply `Ok(None)` to whatever is asked next.
    Cancel,
}

/// FormPrompter that replays a fixed list of answers and records what it was asked.
#[allow(dead_code)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub headings: Vec<String>,
    pub labels: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers: answers.into(), headings: Vec::new(), labels: Vec::new() }
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    fn next(&mut self, asked: &str) -> Result<Answer, AppError> {
        self.answers
            .pop_front()
            .ok_or_else(|| AppError::PromptError(format!("no scripted answer for '{}'", asked)))
    }

    fn mismatch(asked: &str, answer: &Answer) -> AppError {
        AppError::PromptError(format!("scripted answer {:?} does not fit '{}'", answer, asked))
    }
}

impl FormPrompter for ScriptedPrompter {
    fn heading(&mut self, title: &str) {
        self.headings.push(title.to_string());
    }

    fn text(&mut self, question: TextQuestion<'_>) -> Result<Option<String>, AppError> {
        self.labels.push(question.label.to_string());
        match self.next(question.label)? {
            Answer::Text(value) => Ok(Some(value)),
            Answer::Cancel => Ok(None),
            other => Err(Self::mismatch(question.label, &other)),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<Option<bool>, AppError> {
        self.labels.push(prompt.to_string());
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(Some(value)),
            Answer::Cancel => Ok(None),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }

    fn select(
        &mut self,
        prompt: &str,
        items: &[&str],
        _default: usize,
    ) -> Result<Option<usize>, AppError> {
        self.labels.push(prompt.to_string());
        match self.next(prompt)? {
            Answer::Select(index) if index < items.len() => Ok(Some(index)),
            Answer::Cancel => Ok(None),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }
}
