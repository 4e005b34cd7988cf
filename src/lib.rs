//! promptgen: assemble structured, bilingual LLM prompts from form fields.
//!
//! The core is [`generate`], a total function from a [`FieldSet`] and a
//! [`Locale`] to a ReAct-style prompt document. The CLI in `app::cli` layers
//! field files, an interactive form, export and clipboard delivery on top.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DeliveryOptions, DeliveryReport, FieldsSource, GenerateRequest, GeneratedPrompt, LoadedConfig,
    export_prompt_at, generate_from_request, generate_prompt, load_config_at, resolve_locale,
};
pub use domain::{
    ActionKind, ActionStep, AppConfig, AppError, ExportFile, FieldEntry, FieldSet, Locale,
    ScalarField, catalog, export_file_name, field_table, generate,
};
pub use services::{FieldsFormat, read_fields_file};
