pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod fields;
pub mod locale;
pub mod prompt_assemble;

pub use catalog::{FieldEntry, FormSection, LocaleCatalog, catalog, field_table};
pub use config::AppConfig;
pub use error::AppError;
pub use export::{ExportFile, export_file_name};
pub use fields::{ActionKind, ActionStep, FieldSet, ScalarField};
pub use locale::Locale;
pub use prompt_assemble::generate;
