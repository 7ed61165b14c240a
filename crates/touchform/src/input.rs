//! View model of a reusable form input.
//!
//! `FormInput` keeps its own touched flag, merges it with the parent's
//! override and decides whether the error label is shown. Rendering is left
//! to whatever toolkit hosts it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::id::FieldId;
use crate::touched::effective_touched;

pub type ChangeHandler = Box<dyn FnMut(&FieldId, &str) + Send>;
pub type BlurHandler = Box<dyn FnMut(&FieldId) + Send>;

/// Soft keyboard requested for the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardKind {
    #[default]
    Default,
    Numeric,
    Email,
    Url,
}

/// Presentation options passed through to the underlying text input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub placeholder: Option<String>,
    pub keyboard: KeyboardKind,
    /// Obscure the entered text.
    pub secure: bool,
    /// Longest accepted value in characters; longer input is cut.
    pub max_length: Option<usize>,
    pub autocapitalize: bool,
}

/// Props accepted by [`FormInput`].
#[derive(Default)]
pub struct InputProps {
    pub label: String,
    pub error_label: Option<String>,
    /// Override from the parent, typically set after a submit attempt.
    pub touched: Option<bool>,
    pub on_change: Option<ChangeHandler>,
    pub on_blur: Option<BlurHandler>,
    pub config: InputConfig,
}

impl InputProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Props mirroring a form field's label, error and touched flag.
    pub fn from_field(field: &Field) -> Self {
        Self {
            label: field.label().to_string(),
            error_label: field.error().map(str::to_string),
            touched: Some(field.is_touched()),
            ..Self::default()
        }
    }

    pub fn error_label(mut self, error: Option<String>) -> Self {
        self.error_label = error;
        self
    }

    pub fn touched(mut self, touched: bool) -> Self {
        self.touched = Some(touched);
        self
    }

    pub fn on_change(mut self, handler: impl FnMut(&FieldId, &str) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl FnMut(&FieldId) + Send + 'static) -> Self {
        self.on_blur = Some(Box::new(handler));
        self
    }

    pub fn config(mut self, config: InputConfig) -> Self {
        self.config = config;
        self
    }
}

impl fmt::Debug for InputProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputProps")
            .field("label", &self.label)
            .field("error_label", &self.error_label)
            .field("touched", &self.touched)
            .field("on_change", &self.on_change.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("config", &self.config)
            .finish()
    }
}

#[derive(Debug)]
pub struct FormInput {
    field: FieldId,
    props: InputProps,
    value: String,
    touched: bool,
}

impl FormInput {
    pub fn new(field: FieldId, props: InputProps) -> Self {
        Self {
            field,
            props,
            value: String::new(),
            touched: false,
        }
    }

    pub fn field(&self) -> &FieldId {
        &self.field
    }

    pub fn label(&self) -> &str {
        &self.props.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn config(&self) -> &InputConfig {
        &self.props.config
    }

    /// Replaces props from the parent. The internal touched flag survives.
    pub fn set_props(&mut self, props: InputProps) {
        self.props = props;
    }

    /// Text entered; emits `(field, value)` to the change handler.
    pub fn change(&mut self, value: &str) {
        self.value = match self.props.config.max_length {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        };
        if let Some(handler) = self.props.on_change.as_mut() {
            handler(&self.field, &self.value);
        }
    }

    /// Focus left the input; marks it touched and emits the field id.
    pub fn blur(&mut self) {
        self.touched = true;
        if let Some(handler) = self.props.on_blur.as_mut() {
            handler(&self.field);
        }
    }

    pub fn is_touched(&self) -> bool {
        effective_touched(self.touched, self.props.touched.unwrap_or(false))
    }

    /// The error label, only when present and the input counts as touched.
    pub fn displayed_error(&self) -> Option<&str> {
        self.props
            .error_label
            .as_deref()
            .filter(|_| self.is_touched())
    }
}
