//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::commands::{deliver, form, generate};
use crate::ports::{ClipboardWriter, FormPrompter};
use crate::services::{ArboardClipboard, DialoguerFormPrompter};

pub use crate::app::commands::deliver::{DeliveryOptions, DeliveryReport};
pub use crate::app::commands::generate::{FieldsSource, GenerateRequest, GeneratedPrompt};
pub use crate::app::config::LoadedConfig;
pub use crate::domain::{AppConfig, AppError, FieldSet, Locale};

/// Create an `AppContext` wired to the system clipboard and the terminal.
pub fn create_context(config: AppConfig) -> AppContext<ArboardClipboard, DialoguerFormPrompter> {
    AppContext::new(config, ArboardClipboard::new(), DialoguerFormPrompter::new())
}

/// Load configuration for the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, AppError> {
    load_config_at(explicit, &std::env::current_dir()?)
}

/// Load configuration as if run from `cwd`.
pub fn load_config_at(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, AppError> {
    crate::app::config::load_config(explicit, cwd)
}

/// Parse a locale argument, falling back to the configured default.
pub fn resolve_locale(arg: Option<&str>, config: &AppConfig) -> Result<Locale, AppError> {
    match arg {
        Some(value) => value.parse(),
        None => Ok(config.defaults.locale),
    }
}

// =============================================================================
// Generate API
// =============================================================================

/// Render a prompt from fields already in memory.
pub fn generate_prompt(fields: &FieldSet, locale: Locale) -> GeneratedPrompt {
    GeneratedPrompt::render(fields, locale)
}

/// Gather fields from the request's sources and render the prompt.
pub fn generate_from_request(request: &GenerateRequest) -> Result<GeneratedPrompt, AppError> {
    generate::execute(request)
}

/// Generate and deliver a prompt.
pub fn run_generate<C: ClipboardWriter, P: FormPrompter>(
    ctx: &mut AppContext<C, P>,
    request: &GenerateRequest,
    options: &DeliveryOptions,
) -> Result<(GeneratedPrompt, DeliveryReport), AppError> {
    let prompt = generate::execute(request)?;
    let report = deliver::deliver(&prompt, options, ctx.clipboard_mut())?;
    Ok((prompt, report))
}

// =============================================================================
// Form API
// =============================================================================

/// Walk the interactive form, then generate and deliver the prompt.
///
/// Returns `Ok(None)` when the user cancels.
pub fn run_form<C: ClipboardWriter, P: FormPrompter>(
    ctx: &mut AppContext<C, P>,
    locale: Locale,
    options: &DeliveryOptions,
) -> Result<Option<(GeneratedPrompt, DeliveryReport)>, AppError> {
    let Some(fields) = form::fill_form(ctx.prompter_mut(), locale)? else {
        return Ok(None);
    };
    let prompt = GeneratedPrompt::render(&fields, locale);
    let report = deliver::deliver(&prompt, options, ctx.clipboard_mut())?;
    Ok(Some((prompt, report)))
}

// =============================================================================
// Export API
// =============================================================================

/// Write `generated_prompt_<locale>.txt` into `dir`.
pub fn export_prompt_at(dir: &Path, prompt: &GeneratedPrompt) -> Result<PathBuf, AppError> {
    deliver::write_export(dir, &prompt.export_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Answer, MockClipboard, ScriptedPrompter};

    #[test]
    fn resolve_locale_prefers_argument() {
        let config = AppConfig::default();
        assert_eq!(resolve_locale(Some("zh"), &config).unwrap(), Locale::Zh);
        assert_eq!(resolve_locale(None, &config).unwrap(), Locale::En);
        assert!(resolve_locale(Some("de"), &config).is_err());
    }

    #[test]
    fn run_form_copies_generated_prompt() {
        let mut answers = vec![Answer::Text("rust".into())];
        answers.extend(std::iter::repeat_n(Answer::Text(String::new()), 2));
        answers.extend([Answer::Select(0), Answer::Text(String::new()), Answer::Confirm(false)]);
        answers.extend(std::iter::repeat_n(Answer::Text(String::new()), 3));
        answers.extend([Answer::Confirm(false), Answer::Text(String::new())]);

        let mut ctx =
            AppContext::new(AppConfig::default(), MockClipboard::new(), ScriptedPrompter::new(answers));
        let options = DeliveryOptions { copy: true, ..Default::default() };

        let (prompt, report) = run_form(&mut ctx, Locale::En, &options).unwrap().unwrap();

        assert!(report.copied);
        assert!(prompt.content.contains("You are an expert in rust with specialization in"));
        assert!(prompt.content.contains("- [Search(\"{action}\")]"));
        assert_eq!(ctx.clipboard_mut().last(), Some(prompt.content.as_str()));
    }

    #[test]
    fn run_form_cancel_delivers_nothing() {
        let mut ctx = AppContext::new(
            AppConfig::default(),
            MockClipboard::new(),
            ScriptedPrompter::new(vec![Answer::Cancel]),
        );
        let options = DeliveryOptions { copy: true, ..Default::default() };

        assert!(run_form(&mut ctx, Locale::Zh, &options).unwrap().is_none());
        assert!(ctx.clipboard_mut().writes.is_empty());
    }
}
