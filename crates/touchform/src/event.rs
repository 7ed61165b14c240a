//! Form events and the state-transition function that applies them.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::form::{FormState, SubmitOutcome};
use crate::id::FieldId;

/// A discrete UI event addressed to a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// A keystroke changed a field's value.
    Change { field: FieldId, value: String },
    /// A field lost focus.
    Blur { field: FieldId },
    Submit,
    Reset,
}

/// New state produced by an event, plus the submit outcome for `Submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FormState,
    pub outcome: Option<SubmitOutcome>,
}

/// Applies one event to a form, leaving the old state untouched.
///
/// Fails only when the event names a field the form does not have.
pub fn reduce(state: &FormState, event: &FormEvent) -> Result<Transition> {
    let mut next = state.clone();
    let outcome = match event {
        FormEvent::Change { field, value } => {
            next.set_value(field, value.as_str())?;
            None
        }
        FormEvent::Blur { field } => {
            next.blur(field)?;
            None
        }
        FormEvent::Submit => Some(next.submit()),
        FormEvent::Reset => {
            next.reset();
            None
        }
    };
    Ok(Transition {
        state: next,
        outcome,
    })
}

/// Applies events in order, stopping at the first error.
pub fn replay<'a>(
    state: &FormState,
    events: impl IntoIterator<Item = &'a FormEvent>,
) -> Result<Transition> {
    events.into_iter().try_fold(
        Transition {
            state: state.clone(),
            outcome: None,
        },
        |acc, event| reduce(&acc.state, event),
    )
}
