use std::fmt::Write;

use touchform::{FormState, SubmitOutcome};

/// Renders one line per field: id, value, touched marker and visible error.
pub fn render(form: &FormState, outcome: Option<&SubmitOutcome>) -> String {
    let mut out = String::new();
    let width = form.fields().map(|f| f.id().len()).max().unwrap_or(0);

    for field in form.fields() {
        let marker = if field.is_touched() { '*' } else { ' ' };
        let status = match field.visible_error() {
            Some(error) => format!("  ! {error}"),
            None => String::new(),
        };
        let _ = writeln!(
            out,
            "  {marker} {:<width$}  {:?}{status}",
            field.id().as_str(),
            field.value(),
        );
    }

    match outcome {
        Some(SubmitOutcome::Accepted) => out.push_str("submit: accepted\n"),
        Some(SubmitOutcome::Blocked { first_invalid }) => {
            let _ = writeln!(out, "submit: blocked at {first_invalid}");
        }
        None => {}
    }
    out
}
