//! Locale-indexed label, placeholder and phrase tables.
//!
//! The assembler owns the document structure; everything that varies by
//! language lives here. Adding a locale means adding one [`LocaleCatalog`].
//!
//! Sentence patterns use `{slot}` markers named after field wire keys
//! (`{domain}`, `{specificGoal}`, ...).

mod en;
mod zh;

use serde::Serialize;

use super::fields::{ACTION_KEY, ActionKind, ScalarField};
use super::locale::Locale;

/// Form section a field is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSection {
    Role,
    Task,
    Action,
    Context,
    Output,
}

impl FormSection {
    /// Sections in form order.
    pub const ALL: [FormSection; 5] = [
        FormSection::Role,
        FormSection::Task,
        FormSection::Action,
        FormSection::Context,
        FormSection::Output,
    ];
}

/// Display texts for one form field.
#[derive(Debug)]
pub struct FieldText {
    /// Widget label.
    pub title: &'static str,
    /// Bracketed token rendered when the field is blank.
    pub token: &'static str,
    /// Example input shown as a hint.
    pub hint: &'static str,
    /// One-line help text.
    pub help: &'static str,
    pub section: FormSection,
}

/// Display texts for one action kind.
#[derive(Debug)]
pub struct ActionKindText {
    /// Verb rendered in the action line, e.g. `Search` in `- [Search("...")]`.
    pub label: &'static str,
    pub input_label: &'static str,
    pub hint: &'static str,
    pub help: &'static str,
}

/// Headers, fixed lines and sentence patterns of the generated document.
#[derive(Debug)]
pub struct DocumentText {
    pub role_header: &'static str,
    pub task_header: &'static str,
    pub context_header: &'static str,
    pub reasoning_header: &'static str,
    pub action_header: &'static str,
    pub observation_header: &'static str,
    pub output_header: &'static str,
    /// Slots: `domain`, `specialization`.
    pub role_sentence: &'static str,
    /// Slots: `specificGoal`.
    pub task_sentence: &'static str,
    pub context_intro: &'static str,
    pub reasoning_line: &'static str,
    pub observation_line: &'static str,
    /// Slots: `format`, `structure`.
    pub output_structured: &'static str,
    /// Slots: `format`. Used when `structure` is blank.
    pub output_free: &'static str,
    /// Slots: `unwantedResult`.
    pub avoid_line: &'static str,
}

/// Questions asked by the interactive form.
#[derive(Debug)]
pub struct FormText {
    pub structure_question: &'static str,
    pub action_kind_question: &'static str,
    pub add_action_question: &'static str,
}

/// Everything locale-specific, for one locale.
#[derive(Debug)]
pub struct LocaleCatalog {
    pub locale: Locale,
    pub display_name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Indexed by [`FormSection`] declaration order.
    pub sections: [&'static str; 5],
    /// Indexed by [`ScalarField`] declaration order.
    pub fields: [FieldText; 8],
    pub action_field: FieldText,
    /// Indexed by [`ActionKind`] declaration order.
    pub action_kinds: [ActionKindText; 3],
    pub document: DocumentText,
    pub form: FormText,
}

impl LocaleCatalog {
    pub fn field(&self, field: ScalarField) -> &FieldText {
        &self.fields[field as usize]
    }

    pub fn action_kind(&self, kind: ActionKind) -> &ActionKindText {
        &self.action_kinds[kind as usize]
    }

    pub fn section_name(&self, section: FormSection) -> &'static str {
        self.sections[section as usize]
    }
}

/// Look up the catalog for a locale.
pub fn catalog(locale: Locale) -> &'static LocaleCatalog {
    match locale {
        Locale::En => &en::EN,
        Locale::Zh => &zh::ZH,
    }
}

/// One row of the field table handed to form front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    pub key: &'static str,
    pub section: &'static str,
    pub title: &'static str,
    pub placeholder: &'static str,
    pub hint: &'static str,
    pub help: &'static str,
}

impl FieldEntry {
    fn new(key: &'static str, text: &FieldText, catalog: &LocaleCatalog) -> Self {
        Self {
            key,
            section: catalog.section_name(text.section),
            title: text.title,
            placeholder: text.token,
            hint: text.hint,
            help: text.help,
        }
    }
}

/// The form's fields for a locale, grouped by section in form order.
pub fn field_table(locale: Locale) -> Vec<FieldEntry> {
    let catalog = catalog(locale);
    let mut entries = Vec::with_capacity(ScalarField::ALL.len() + 1);
    for section in FormSection::ALL {
        if section == FormSection::Action {
            entries.push(FieldEntry::new(ACTION_KEY, &catalog.action_field, catalog));
            continue;
        }
        for field in ScalarField::ALL {
            let text = catalog.field(field);
            if text.section == section {
                entries.push(FieldEntry::new(field.key(), text, catalog));
            }
        }
    }
    entries
}
