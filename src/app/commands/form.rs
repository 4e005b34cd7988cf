//! Interactive form walk.
//!
//! The walk owns the FieldSet it builds and hands it back; nothing is kept
//! between runs.

use tracing::debug;

use crate::domain::{
    ActionKind, ActionStep, AppError, FieldSet, FormSection, Locale, LocaleCatalog, ScalarField,
    catalog,
};
use crate::ports::{FormPrompter, TextQuestion};

/// Walk every section of the form in `locale`.
///
/// Returns `Ok(None)` when the user cancels at any question.
pub fn fill_form<P: FormPrompter>(
    prompter: &mut P,
    locale: Locale,
) -> Result<Option<FieldSet>, AppError> {
    let catalog = catalog(locale);
    let mut fields = FieldSet::new();

    for section in FormSection::ALL {
        prompter.heading(catalog.section_name(section));
        let answered = match section {
            FormSection::Action => ask_actions(prompter, catalog, &mut fields)?,
            _ => ask_section(prompter, catalog, section, &mut fields)?,
        };
        if answered.is_none() {
            debug!(?section, "form cancelled");
            return Ok(None);
        }
    }

    Ok(Some(fields))
}

fn ask_section<P: FormPrompter>(
    prompter: &mut P,
    catalog: &LocaleCatalog,
    section: FormSection,
    fields: &mut FieldSet,
) -> Result<Option<()>, AppError> {
    for field in ScalarField::ALL {
        let text = catalog.field(field);
        if text.section != section {
            continue;
        }

        if field == ScalarField::Structure {
            let Some(specify) = prompter.confirm(catalog.form.structure_question, false)? else {
                return Ok(None);
            };
            if !specify {
                fields.set(field, "");
                continue;
            }
        }

        let question = TextQuestion { label: text.title, hint: text.hint, help: text.help };
        let Some(value) = prompter.text(question)? else {
            return Ok(None);
        };
        fields.set(field, value);
    }
    Ok(Some(()))
}

fn ask_actions<P: FormPrompter>(
    prompter: &mut P,
    catalog: &LocaleCatalog,
    fields: &mut FieldSet,
) -> Result<Option<()>, AppError> {
    let labels: Vec<&str> =
        ActionKind::ALL.iter().map(|kind| catalog.action_kind(*kind).label).collect();

    loop {
        let Some(index) = prompter.select(catalog.form.action_kind_question, &labels, 0)? else {
            return Ok(None);
        };
        let kind = ActionKind::ALL.get(index).copied().unwrap_or_default();
        let text = catalog.action_kind(kind);

        let question = TextQuestion { label: text.input_label, hint: text.hint, help: text.help };
        let Some(value) = prompter.text(question)? else {
            return Ok(None);
        };
        fields.action.push(ActionStep::new(kind, value));

        match prompter.confirm(catalog.form.add_action_question, false)? {
            Some(true) => continue,
            Some(false) => return Ok(Some(())),
            None => return Ok(None),
        }
    }
}
