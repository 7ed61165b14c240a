use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use touchform::{FormState, SubmitOutcome};

use crate::commands::load_form;
use crate::report;

pub fn run(
    form_path: Option<&Path>,
    values_path: Option<&Path>,
) -> anyhow::Result<SubmitOutcome> {
    let mut form = load_form(form_path)?;

    if let Some(path) = values_path {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let values: BTreeMap<String, Value> = serde_json::from_str(&raw)
            .with_context(|| format!("{} must be a JSON object", path.display()))?;
        apply_values(&mut form, &values)?;
    }

    let outcome = form.submit();
    print!("{}", report::render(&form, Some(&outcome)));
    Ok(outcome)
}

/// Stores each value on its field. JSON numbers and booleans are taken as
/// their textual form, `null` as an empty value.
pub fn apply_values(form: &mut FormState, values: &BTreeMap<String, Value>) -> anyhow::Result<()> {
    for (id, value) in values {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => anyhow::bail!("value for `{id}` must be a string or number, got {other}"),
        };
        form.set_value(id, text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const FORM: &str = r#"
[[fields]]
id = "year"
kind = "year"

[[fields]]
id = "email"
kind = "email"
"#;

    fn temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_numbers_are_accepted_as_text() {
        let form_file = temp(FORM);
        let values = temp(r#"{"year": 1990, "email": "a@b.io"}"#);
        let outcome = run(Some(form_file.path()), Some(values.path())).unwrap();
        assert_eq!(outcome, SubmitOutcome::Accepted);
    }

    #[test]
    fn test_blocked_reports_first_invalid() {
        let form_file = temp(FORM);
        let values = temp(r#"{"year": "1800"}"#);
        let outcome = run(Some(form_file.path()), Some(values.path())).unwrap();
        assert_eq!(
            outcome.first_invalid().map(|id| id.to_string()),
            Some("year".to_string())
        );
    }

    #[test]
    fn test_unknown_value_key_fails() {
        let form_file = temp(FORM);
        let values = temp(r#"{"colour": "red"}"#);
        assert!(run(Some(form_file.path()), Some(values.path())).is_err());
    }

    #[test]
    fn test_nested_value_rejected() {
        let mut form = load_form(Some(temp(FORM).path())).unwrap();
        let values: BTreeMap<String, Value> =
            serde_json::from_str(r#"{"year": [1990]}"#).unwrap();
        assert!(apply_values(&mut form, &values).is_err());
    }
}
