use nutype::nutype;

/// Identifier of a field within one form.
///
/// Surrounding whitespace is trimmed and the result must not be empty.
///
/// ```rust
/// use touchform::FieldId;
///
/// let id = FieldId::try_new("  birth_year ".to_string()).unwrap();
/// assert_eq!(id.as_str(), "birth_year");
/// assert!(FieldId::try_new("   ".to_string()).is_err());
/// ```
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct FieldId(String);

impl FieldId {
    /// Parses an identifier from a borrowed string.
    pub fn parse(raw: &str) -> Result<Self, FieldIdError> {
        Self::try_new(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_rejects_empty() {
        assert_eq!(FieldId::parse(" email ").unwrap().into_inner(), "email");
        assert!(FieldId::parse("").is_err());
        assert!(FieldId::parse(" \t").is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let id: FieldId = serde_json::from_str(r#""year""#).unwrap();
        assert_eq!(id.as_str(), "year");
        assert!(serde_json::from_str::<FieldId>(r#""  ""#).is_err());
    }
}
