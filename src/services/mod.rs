mod clipboard_arboard;
mod dialoguer_form_prompter;
pub mod fields_file;

pub use clipboard_arboard::ArboardClipboard;
pub use dialoguer_form_prompter::DialoguerFormPrompter;
pub use fields_file::{FieldsFormat, read_fields_file, read_fields_json};
