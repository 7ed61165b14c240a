//! Field Validator: computes an error label from a field's kind and raw value.
//!
//! Both functions are pure. Surrounding whitespace is ignored for every kind:
//! the value is trimmed once before any rule runs. Partial numeric input (for
//! example the first digit of a year) is judged like any other value; hiding
//! errors while the user is still typing is the job of the touched flag.

use touchform_validation as checks;

use crate::field::FieldDefinition;
use crate::kind::FieldKind;

/// Error label for a value that is not a whole number.
pub const NOT_A_NUMBER: &str = checks::NOT_A_WHOLE_NUMBER;
pub const INVALID_EMAIL: &str = "Must be a valid email address";
pub const INVALID_URL: &str = "Must be a valid URL";
pub const PATTERN_MISMATCH: &str = "Must match the required format";

/// Validates a raw value against a field kind.
///
/// Returns `None` when the value is acceptable.
pub fn validate(kind: &FieldKind, value: &str) -> Option<String> {
    let value = value.trim();
    match kind {
        FieldKind::Text {
            min_length,
            max_length,
        } => min_length
            .and_then(|min| checks::validate_min_length(value, min).err())
            .or_else(|| max_length.and_then(|max| checks::validate_max_length(value, max).err())),
        FieldKind::Email => (!checks::is_valid_email(value)).then(|| INVALID_EMAIL.to_string()),
        FieldKind::Url => (!checks::is_valid_url(value)).then(|| INVALID_URL.to_string()),
        FieldKind::Year(range) => checks::validate_whole_number(
            value,
            Some(range.min().into()),
            Some(range.max().into()),
        )
        .err(),
        FieldKind::Number { min, max } => checks::validate_whole_number(value, *min, *max).err(),
        FieldKind::Pattern(pattern) => {
            (!pattern.is_match(value)).then(|| PATTERN_MISMATCH.to_string())
        }
    }
}

/// Validates a whole field definition.
///
/// Optional fields never carry an error. A required field with a blank value
/// reports `"{label} is required"` and skips the kind check.
pub fn validate_field(definition: &FieldDefinition) -> Option<String> {
    if definition.optional {
        return None;
    }
    if checks::is_blank(&definition.value) {
        return Some(format!("{} is required", definition.label));
    }
    validate(&definition.kind, &definition.value)
}
