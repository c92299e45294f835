//! Typed event payloads.
//!
//! A change event carries the committed value of the control that fired it.
//! Handlers take the payload and return the new display state; subscribing
//! the handler to a concrete event source is the front end's job.

/// A committed value change on an input control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The control's value at the time the change was committed.
    pub value: String,
}

impl ChangeEvent {
    /// Create a change event carrying `value`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
