use clap::Args;

use crate::app::api::{self, LoadedConfig};
use crate::domain::{ActionKind, AppError, Locale, catalog, field_table};

#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// Locale: en or zh (defaults to the configured locale)
    #[arg(short, long)]
    locale: Option<String>,
    /// Print the field table as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: FieldsArgs, loaded: &LoadedConfig) -> Result<(), AppError> {
    let locale = api::resolve_locale(args.locale.as_deref(), &loaded.config)?;
    let entries = field_table(locale);

    if args.json {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|err| AppError::parse_error("field table", err))?;
        println!("{}", json);
        return Ok(());
    }

    let mut section = "";
    for entry in &entries {
        if entry.section != section {
            section = entry.section;
            println!("{}:", section);
        }
        println!("  {} - {} {}", entry.key, entry.title, entry.placeholder);
        println!("    {}", entry.help);
    }

    let catalog = catalog(locale);
    println!("\nAction types:");
    for kind in ActionKind::ALL {
        let text = catalog.action_kind(kind);
        println!("  {} - {} ({}): {}", kind, text.label, text.input_label, text.help);
    }
    Ok(())
}

pub fn run_locales() -> Result<(), AppError> {
    for locale in Locale::ALL {
        println!("{}\t{}", locale.code(), catalog(locale).display_name);
    }
    Ok(())
}
