use crate::domain::catalog::{LocaleCatalog, catalog};
use crate::domain::fields::{ActionKind, FieldSet, ScalarField};
use crate::domain::locale::Locale;

use super::slots::fill;

/// Assemble the prompt document for `fields` in `locale`.
///
/// Sections are emitted in a fixed order separated by blank lines: role,
/// task, context, the reasoning/action/observation block, and output format.
/// Blank scalar fields render as the locale's placeholder token, except
/// `structure`, which switches the output line to its free-structure clause.
/// Values are trimmed and inserted verbatim.
///
/// Total and pure: identical inputs yield identical output.
pub fn generate(fields: &FieldSet, locale: Locale) -> String {
    let catalog = catalog(locale);
    let doc = &catalog.document;
    let value = |field: ScalarField| fields.filled(field).unwrap_or(catalog.field(field).token);

    let role = fill(
        doc.role_sentence,
        &[
            (ScalarField::Domain.key(), value(ScalarField::Domain)),
            (ScalarField::Specialization.key(), value(ScalarField::Specialization)),
        ],
    );
    let task = fill(
        doc.task_sentence,
        &[(ScalarField::SpecificGoal.key(), value(ScalarField::SpecificGoal))],
    );

    let format_slot = (ScalarField::Format.key(), value(ScalarField::Format));
    let output = match fields.filled(ScalarField::Structure) {
        Some(structure) => {
            fill(doc.output_structured, &[format_slot, (ScalarField::Structure.key(), structure)])
        }
        None => fill(doc.output_free, &[format_slot]),
    };
    let avoid = fill(
        doc.avoid_line,
        &[(ScalarField::UnwantedResult.key(), value(ScalarField::UnwantedResult))],
    );

    let sections = [
        format!("{}\n- {}", doc.role_header, role),
        format!("{}\n- {}", doc.task_header, task),
        format!(
            "{}\n- {}\n  - {}\n  - {}",
            doc.context_header,
            doc.context_intro,
            value(ScalarField::Details),
            value(ScalarField::Constraints)
        ),
        format!("{}\n- {}", doc.reasoning_header, doc.reasoning_line),
        format!("{}\n{}", doc.action_header, action_lines(fields, catalog).join("\n")),
        format!("{}\n- {}", doc.observation_header, doc.observation_line),
        format!("{}\n- {}\n- {}", doc.output_header, output, avoid),
    ];

    sections.join("\n\n")
}

/// One line per non-blank step, or a single placeholder line when none remain.
fn action_lines(fields: &FieldSet, catalog: &LocaleCatalog) -> Vec<String> {
    let lines: Vec<String> = fields
        .filled_actions()
        .map(|step| action_line(catalog.action_kind(step.kind).label, step.trimmed_value()))
        .collect();

    if lines.is_empty() {
        let verb = catalog.action_kind(ActionKind::default()).label;
        return vec![action_line(verb, catalog.action_field.token)];
    }
    lines
}

fn action_line(verb: &str, value: &str) -> String {
    format!("- [{}(\"{}\")]", verb, value)
}
