//! Form state and the submit-time aggregator.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{FormError, Result};
use crate::field::{Field, FieldDefinition, FieldValidationState};
use crate::id::FieldId;

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Every field passed.
    Accepted,
    /// At least one field is invalid; the first one in declaration order is reported.
    Blocked { first_invalid: FieldId },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }

    pub fn first_invalid(&self) -> Option<&FieldId> {
        match self {
            SubmitOutcome::Accepted => None,
            SubmitOutcome::Blocked { first_invalid } => Some(first_invalid),
        }
    }
}

/// Fields of one form, keyed by unique id and iterated in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<Field>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a form from definitions, rejecting duplicate ids.
    pub fn from_definitions(definitions: impl IntoIterator<Item = FieldDefinition>) -> Result<Self> {
        definitions
            .into_iter()
            .try_fold(Self::new(), |form, definition| form.with_field(definition))
    }

    pub fn with_field(mut self, definition: FieldDefinition) -> Result<Self> {
        self.insert(definition)?;
        Ok(self)
    }

    pub fn insert(&mut self, definition: FieldDefinition) -> Result<()> {
        if self.get(&definition.id).is_some() {
            return Err(FormError::DuplicateField(definition.id.into_inner()));
        }
        debug!(field = %definition.id, kind = %definition.kind, "field mounted");
        self.fields.push(Field::new(definition));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id().as_str() == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Field> {
        self.fields
            .iter_mut()
            .find(|f| f.id().as_str() == id)
            .ok_or_else(|| FormError::UnknownField(id.to_string()))
    }

    fn require(&self, id: &str) -> Result<&Field> {
        self.get(id)
            .ok_or_else(|| FormError::UnknownField(id.to_string()))
    }

    /// Stores a new raw value and recomputes that field's error.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        let field = self.get_mut(id)?;
        field.set_value(value);
        debug!(field = id, error = ?field.error(), "value changed");
        Ok(())
    }

    pub fn value(&self, id: &str) -> Result<&str> {
        self.require(id).map(Field::value)
    }

    /// The field lost focus.
    pub fn blur(&mut self, id: &str) -> Result<()> {
        self.get_mut(id)?.blur();
        debug!(field = id, "field touched");
        Ok(())
    }

    pub fn is_touched(&self, id: &str) -> Result<bool> {
        self.require(id).map(Field::is_touched)
    }

    pub fn error(&self, id: &str) -> Result<Option<&str>> {
        self.require(id).map(Field::error)
    }

    pub fn visible_error(&self, id: &str) -> Result<Option<&str>> {
        self.require(id).map(Field::visible_error)
    }

    pub fn state(&self, id: &str) -> Result<FieldValidationState> {
        self.require(id).map(Field::state)
    }

    pub fn is_dirty(&self, id: &str) -> Result<bool> {
        self.require(id).map(Field::is_dirty)
    }

    /// No field touched and no value changed since mount or reset.
    pub fn is_pristine(&self) -> bool {
        self.fields.iter().all(|f| !f.is_touched() && !f.is_dirty())
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.error().is_none())
    }

    /// Current errors in declaration order, whether or not they are visible.
    pub fn errors(&self) -> Vec<(&FieldId, &str)> {
        self.fields
            .iter()
            .filter_map(|f| f.error().map(|e| (f.id(), e)))
            .collect()
    }

    pub fn first_invalid(&self) -> Option<&FieldId> {
        self.fields
            .iter()
            .find(|f| f.error().is_some())
            .map(Field::id)
    }

    /// Forces every field touched, revalidates all of them and reports the
    /// first invalid field.
    pub fn submit(&mut self) -> SubmitOutcome {
        for field in &mut self.fields {
            field.force_touched();
        }

        let outcome = match self.first_invalid() {
            Some(id) => SubmitOutcome::Blocked {
                first_invalid: id.clone(),
            },
            None => SubmitOutcome::Accepted,
        };

        match &outcome {
            SubmitOutcome::Accepted => info!(fields = self.len(), "submit accepted"),
            SubmitOutcome::Blocked { first_invalid } => info!(
                first_invalid = %first_invalid,
                invalid = self.errors().len(),
                "submit blocked"
            ),
        }
        outcome
    }

    /// Restores mount-time values and clears every touched flag.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        debug!(fields = self.len(), "form reset");
    }
}

/// Form Aggregator: consumes a form, forces all fields touched with fresh
/// errors, and returns the updated form with the first invalid field.
pub fn validate_form(mut fields: FormState) -> (FormState, Option<FieldId>) {
    let first_invalid = fields.submit().first_invalid().cloned();
    (fields, first_invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::FieldKind;
    use pretty_assertions::assert_eq;

    fn id(raw: &str) -> FieldId {
        FieldId::parse(raw).unwrap()
    }

    fn year(name: &str, value: &str) -> FieldDefinition {
        FieldDefinition::new(id(name), name, FieldKind::year()).with_value(value)
    }

    fn abc_form() -> FormState {
        FormState::from_definitions([year("a", "1990"), year("b", "1800"), year("c", "3000")])
            .unwrap()
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = FormState::from_definitions([year("a", ""), year("a", "")]).unwrap_err();
        assert!(matches!(err, FormError::DuplicateField(ref name) if name == "a"));
    }

    #[test]
    fn test_unknown_field() {
        let mut form = abc_form();
        assert!(matches!(form.set_value("zzz", "1"), Err(FormError::UnknownField(_))));
        assert!(matches!(form.blur("zzz"), Err(FormError::UnknownField(_))));
        assert!(form.value("zzz").is_err());
    }

    #[test]
    fn test_first_invalid_in_declaration_order() {
        let (form, first) = validate_form(abc_form());
        assert_eq!(first, Some(id("b")));
        assert!(form.fields().all(Field::is_touched));
    }

    #[test]
    fn test_validate_form_is_idempotent() {
        let (once, first_once) = validate_form(abc_form());
        let (twice, first_twice) = validate_form(once.clone());
        assert_eq!(first_once, first_twice);
        assert_eq!(once, twice);
        assert_eq!(twice.value("c").unwrap(), "3000");
    }

    #[test]
    fn test_submit_forces_touched_regardless_of_prior_state() {
        let mut form = abc_form();
        form.blur("a").unwrap();
        assert!(!form.is_touched("b").unwrap());

        let outcome = form.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Blocked {
                first_invalid: id("b")
            }
        );
        for name in ["a", "b", "c"] {
            assert!(form.is_touched(name).unwrap());
        }
        assert_eq!(
            form.visible_error("b").unwrap(),
            Some("Must be between 1900 and 2019")
        );
    }

    #[test]
    fn test_submit_accepted_when_all_valid() {
        let mut form = abc_form();
        form.set_value("b", "1950").unwrap();
        form.set_value("c", "2000").unwrap();
        assert!(form.submit().is_accepted());
        assert!(form.is_valid());
    }

    #[test]
    fn test_empty_form_accepts() {
        let (form, first) = validate_form(FormState::new());
        assert!(form.is_empty());
        assert_eq!(first, None);
    }

    #[test]
    fn test_value_round_trip_leaves_touched() {
        let mut form = abc_form();
        form.set_value("a", "2001").unwrap();
        assert_eq!(form.value("a").unwrap(), "2001");
        assert!(!form.is_touched("a").unwrap());

        form.blur("a").unwrap();
        form.set_value("a", "2002").unwrap();
        assert!(form.is_touched("a").unwrap());
    }

    #[test]
    fn test_errors_listed_in_order() {
        let form = abc_form();
        let names: Vec<&str> = form.errors().into_iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn test_reset_restores_mount_state() {
        let mut form = abc_form();
        assert!(form.is_pristine());
        form.set_value("b", "1950").unwrap();
        form.submit();
        assert!(!form.is_pristine());
        assert!(form.is_dirty("b").unwrap());

        form.reset();
        assert!(form.is_pristine());
        assert_eq!(form.value("b").unwrap(), "1800");
        assert_eq!(form.visible_error("b").unwrap(), None);
        assert_eq!(form.first_invalid(), Some(&id("b")));
    }
}
