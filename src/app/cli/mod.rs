//! CLI Adapter.

mod fields;
mod form;
mod generate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api::{self, DeliveryOptions, DeliveryReport, LoadedConfig};

#[derive(Parser)]
#[command(name = "promptgen")]
#[command(version)]
#[command(about = "Assemble structured, bilingual LLM prompts from form fields", long_about = None)]
struct Cli {
    /// Config file (defaults to $PROMPTGEN_CONFIG, then ./promptgen.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a prompt from a fields file and/or command-line values
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Fill the fields interactively, then generate the prompt
    #[clap(visible_alias = "f")]
    Form(form::FormArgs),
    /// List form fields with their labels, placeholders and help text
    #[clap(visible_alias = "ls")]
    Fields(fields::FieldsArgs),
    /// List supported locales
    Locales,
}

/// Output flags shared by `generate` and `form`.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct DeliveryArgs {
    /// Write the prompt to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Also save generated_prompt_<locale>.txt into the configured output directory
    #[arg(short = 'e', long)]
    export: bool,
    /// Also copy the prompt to the clipboard
    #[arg(short = 'c', long)]
    copy: bool,
}

impl DeliveryArgs {
    fn options(&self, loaded: &LoadedConfig) -> DeliveryOptions {
        DeliveryOptions {
            output: self.output.clone(),
            export_dir: self.export.then(|| loaded.config.output.directory.clone()),
            copy: self.copy,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = api::load_config(cli.config.as_deref()).and_then(|loaded| match cli.command {
        Commands::Generate(args) => generate::run(args, &loaded),
        Commands::Form(args) => form::run(args, &loaded),
        Commands::Fields(args) => fields::run(args, &loaded),
        Commands::Locales => fields::run_locales(),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the prompt unless it went to a file, then report side outputs on stderr.
fn report_delivery(content: &str, report: &DeliveryReport) {
    match &report.written {
        Some(path) => eprintln!("✅ Wrote prompt to {}", path.display()),
        None => println!("{}", content),
    }
    if let Some(path) = &report.exported {
        eprintln!("✅ Exported {}", path.display());
    }
    if report.copied {
        eprintln!("✅ Copied prompt to clipboard");
    }
}
