use std::path::Path;

use anyhow::Context;
use touchform::{reduce, FormEvent, SubmitOutcome};

use crate::commands::load_form;
use crate::report;

/// Applies each event in order, printing the form after every step.
///
/// Returns the outcome of the last submit, or `Accepted` when the form is
/// valid and no submit was replayed.
pub fn run(form_path: Option<&Path>, events_path: &Path) -> anyhow::Result<SubmitOutcome> {
    let mut form = load_form(form_path)?;
    let raw = std::fs::read_to_string(events_path)
        .with_context(|| format!("failed to read {}", events_path.display()))?;
    let events: Vec<FormEvent> = serde_json::from_str(&raw)
        .with_context(|| format!("{} must be a JSON array of events", events_path.display()))?;

    let mut last_outcome = None;
    for (step, event) in events.iter().enumerate() {
        let transition =
            reduce(&form, event).with_context(|| format!("event {} failed", step + 1))?;
        form = transition.state;
        println!("#{} {}", step + 1, describe(event));
        print!("{}", report::render(&form, transition.outcome.as_ref()));
        if transition.outcome.is_some() {
            last_outcome = transition.outcome;
        }
    }

    Ok(last_outcome.unwrap_or_else(|| match form.first_invalid() {
        Some(id) => SubmitOutcome::Blocked {
            first_invalid: id.clone(),
        },
        None => SubmitOutcome::Accepted,
    }))
}

fn describe(event: &FormEvent) -> String {
    match event {
        FormEvent::Change { field, value } => format!("change {field} = {value:?}"),
        FormEvent::Blur { field } => format!("blur {field}"),
        FormEvent::Submit => "submit".to_string(),
        FormEvent::Reset => "reset".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_replay_ends_with_submit_outcome() {
        let form = temp("[[fields]]\nid = \"year\"\nkind = \"year\"\n");
        let events = temp(
            r#"[
                {"type": "change", "field": "year", "value": "19"},
                {"type": "blur", "field": "year"},
                {"type": "submit"},
                {"type": "change", "field": "year", "value": "1999"}
            ]"#,
        );
        let outcome = run(Some(form.path()), events.path()).unwrap();
        assert_eq!(outcome.first_invalid().map(|id| id.to_string()), Some("year".into()));
    }

    #[test]
    fn test_replay_unknown_field_is_error() {
        let form = temp("[[fields]]\nid = \"year\"\nkind = \"year\"\n");
        let events = temp(r#"[{"type": "blur", "field": "month"}]"#);
        let err = run(Some(form.path()), events.path()).unwrap_err();
        assert!(format!("{err:#}").contains("unknown field `month`"));
    }
}
