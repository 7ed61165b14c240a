//! Field definitions and their derived validation state.

use crate::id::FieldId;
use crate::kind::FieldKind;
use crate::touched::TouchState;
use crate::validator::validate_field;

/// Declared shape of a field plus its current raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub id: FieldId,
    pub label: String,
    pub kind: FieldKind,
    /// Optional fields never carry an error label.
    pub optional: bool,
    pub value: String,
}

impl FieldDefinition {
    pub fn new(id: FieldId, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
            optional: false,
            value: String::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// Derived state of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValidationState {
    pub error: Option<String>,
    pub touched: bool,
}

/// A field tracked by a form: its definition, the value it was mounted with,
/// its touched flag and its current error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    definition: FieldDefinition,
    initial_value: String,
    touch: TouchState,
    error: Option<String>,
}

impl Field {
    pub fn new(definition: FieldDefinition) -> Self {
        let error = validate_field(&definition);
        Self {
            initial_value: definition.value.clone(),
            definition,
            touch: TouchState::new(),
            error,
        }
    }

    pub fn id(&self) -> &FieldId {
        &self.definition.id
    }

    pub fn label(&self) -> &str {
        &self.definition.label
    }

    pub fn kind(&self) -> &FieldKind {
        &self.definition.kind
    }

    pub fn definition(&self) -> &FieldDefinition {
        &self.definition
    }

    pub fn value(&self) -> &str {
        &self.definition.value
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_touched(&self) -> bool {
        self.touch.is_touched()
    }

    /// Error to display: present only once the field is touched.
    pub fn visible_error(&self) -> Option<&str> {
        self.error().filter(|_| self.is_touched())
    }

    /// Value differs from the one the field was mounted with.
    pub fn is_dirty(&self) -> bool {
        self.definition.value != self.initial_value
    }

    pub fn state(&self) -> FieldValidationState {
        FieldValidationState {
            error: self.error.clone(),
            touched: self.is_touched(),
        }
    }

    /// Replaces the value and recomputes the error. Touched is left alone.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.definition.value = value.into();
        self.revalidate();
    }

    pub fn blur(&mut self) {
        self.touch.blur();
    }

    /// Marks the field touched and recomputes its error, as a submit does.
    pub fn force_touched(&mut self) {
        self.touch.force();
        self.revalidate();
    }

    /// Restores the mount-time value and clears touched.
    pub fn reset(&mut self) {
        self.definition.value = self.initial_value.clone();
        self.touch.reset();
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.error = validate_field(&self.definition);
    }
}

impl From<FieldDefinition> for Field {
    fn from(definition: FieldDefinition) -> Self {
        Field::new(definition)
    }
}
