use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use super::{DeliveryArgs, report_delivery};
use crate::app::api::{self, FieldsSource, GenerateRequest, LoadedConfig};
use crate::domain::AppError;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Locale: en or zh (defaults to the configured locale)
    #[arg(short, long)]
    locale: Option<String>,
    /// Fields file (.json, .yaml, .yml, .toml); `-` reads JSON from stdin
    #[arg(short, long)]
    fields: Option<PathBuf>,
    /// Set a field, e.g. --set domain="machine learning" (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
    /// Append an action step, e.g. --action lookup="LLM theory" (repeatable)
    #[arg(short, long, value_name = "KIND=VALUE")]
    action: Vec<String>,
    #[command(flatten)]
    delivery: DeliveryArgs,
}

pub fn run(args: GenerateArgs, loaded: &LoadedConfig) -> Result<(), AppError> {
    let locale = api::resolve_locale(args.locale.as_deref(), &loaded.config)?;
    let request = GenerateRequest {
        locale,
        source: FieldsSource::from_arg(args.fields),
        assignments: args.set,
        actions: args.action,
    };
    debug!(%locale, source = ?request.source, "generate");

    let mut ctx = api::create_context(loaded.config.clone());
    let (prompt, report) = api::run_generate(&mut ctx, &request, &args.delivery.options(loaded))?;
    report_delivery(&prompt.content, &report);
    Ok(())
}
