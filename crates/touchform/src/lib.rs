//! # touchform
//!
//! Form field validation with "touched" state tracking.
//!
//! Each field declares a [`FieldKind`] and holds a raw string value. Its error
//! label is recomputed on every change, but it is only *visible* once the
//! field is touched: the user left it, or a submit was attempted.
//!
//! ```rust
//! use touchform::{FieldDefinition, FieldId, FieldKind, FormState, SubmitOutcome};
//!
//! let year = FieldId::parse("birth_year").unwrap();
//! let mut form = FormState::new()
//!     .with_field(FieldDefinition::new(year.clone(), "Birth year", FieldKind::year()))
//!     .unwrap();
//!
//! form.set_value("birth_year", "1850").unwrap();
//! assert_eq!(form.visible_error("birth_year").unwrap(), None);
//!
//! let outcome = form.submit();
//! assert_eq!(outcome, SubmitOutcome::Blocked { first_invalid: year });
//! assert_eq!(
//!     form.visible_error("birth_year").unwrap(),
//!     Some("Must be between 1900 and 2019")
//! );
//! ```
//!
//! ## Architecture
//!
//! - [`validator`] - pure Field Validator
//! - [`touched`] - Touched Tracker
//! - [`form`] - form state and the submit-time Form Aggregator
//! - [`event`] - `(state, event) -> state` reducer
//! - [`input`] - view model of a reusable input component
//! - [`config`] - TOML form definitions
//!
//! Low-level checks live in the `touchform-validation` crate.

pub mod config;
pub mod error;
pub mod event;
pub mod field;
pub mod form;
pub mod id;
pub mod input;
pub mod kind;
pub mod touched;
pub mod validator;

pub use config::{FieldSpec, FormConfig, KindSpec};
pub use error::{FormError, Result};
pub use event::{reduce, replay, FormEvent, Transition};
pub use field::{Field, FieldDefinition, FieldValidationState};
pub use form::{validate_form, FormState, SubmitOutcome};
pub use id::{FieldId, FieldIdError};
pub use input::{FormInput, InputConfig, InputProps, KeyboardKind};
pub use kind::{FieldKind, Pattern, YearRange};
pub use touched::{effective_touched, TouchState};
pub use validator::{validate, validate_field};
