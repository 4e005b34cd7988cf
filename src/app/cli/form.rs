use clap::Args;

use super::{DeliveryArgs, report_delivery};
use crate::app::api::{self, LoadedConfig};
use crate::domain::{AppError, catalog};

#[derive(Args, Debug)]
pub struct FormArgs {
    /// Locale: en or zh (defaults to the configured locale)
    #[arg(short, long)]
    locale: Option<String>,
    #[command(flatten)]
    delivery: DeliveryArgs,
}

pub fn run(args: FormArgs, loaded: &LoadedConfig) -> Result<(), AppError> {
    let locale = api::resolve_locale(args.locale.as_deref(), &loaded.config)?;
    let catalog = catalog(locale);
    eprintln!("{}\n{}", catalog.title, catalog.subtitle);

    let mut ctx = api::create_context(loaded.config.clone());
    match api::run_form(&mut ctx, locale, &args.delivery.options(loaded))? {
        Some((prompt, report)) => report_delivery(&prompt.content, &report),
        None => eprintln!("Cancelled"),
    }
    Ok(())
}
