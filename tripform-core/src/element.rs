//! Element-handle abstraction for host-environment independence.
//!
//! The components need to read and write a handful of page elements, but
//! must not depend on a browser DOM directly. These traits abstract the
//! three element roles so that different implementations can be provided:
//! - `WebInput` / `WebDisplay` / `WebAlerts` in the WASM crate (real DOM)
//! - the in-memory handles below (terminal harness and tests)
//!
//! The in-memory handles have DOM-like sharing semantics: cloning yields
//! another handle to the same underlying value. The whole system is
//! single-threaded, so `Rc<RefCell<_>>` is sufficient and nothing here
//! is `Send`.

use std::cell::RefCell;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// A control with a user-editable string value (`<input>`).
pub trait InputElement {
    /// The control's current value.
    fn value(&self) -> String;
    /// Overwrite the control's value.
    fn set_value(&mut self, value: &str);
}

/// An element whose text content is displayed to the user.
pub trait DisplayElement {
    /// The element's current text content.
    fn text(&self) -> String;
    /// Overwrite the element's text content.
    fn set_text(&mut self, text: &str);
}

/// A sink for blocking user notifications.
pub trait AlertSink {
    /// Show `message` to the user.
    fn alert(&mut self, message: &str);
}

// ---------------------------------------------------------------------------
// In-memory handles
// ---------------------------------------------------------------------------

/// An in-memory [`InputElement`]; clones share one value.
#[derive(Debug, Clone, Default)]
pub struct MemoryInput(Rc<RefCell<String>>);

impl MemoryInput {
    /// Create an input holding `value`.
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self(Rc::new(RefCell::new(value.to_owned())))
    }
}

impl InputElement for MemoryInput {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }

    fn set_value(&mut self, value: &str) {
        *self.0.borrow_mut() = value.to_owned();
    }
}

/// An in-memory [`DisplayElement`]; clones share one text.
#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay(Rc<RefCell<String>>);

impl MemoryDisplay {
    /// Create a display holding `text`.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self(Rc::new(RefCell::new(text.to_owned())))
    }
}

impl DisplayElement for MemoryDisplay {
    fn text(&self) -> String {
        self.0.borrow().clone()
    }

    fn set_text(&mut self, text: &str) {
        *self.0.borrow_mut() = text.to_owned();
    }
}

/// An [`AlertSink`] that records messages instead of showing them.
///
/// Clones share one log, so a test can keep a handle while the component
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingAlerts(Rc<RefCell<Vec<String>>>);

impl RecordingAlerts {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages alerted so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&mut self, message: &str) {
        self.0.borrow_mut().push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_handles_share_state() {
        let mut a = MemoryInput::with_value("one");
        let b = a.clone();
        a.set_value("two");
        assert_eq!(b.value(), "two");

        let mut c = MemoryDisplay::with_text("10");
        let d = c.clone();
        c.set_text("20");
        assert_eq!(d.text(), "20");
    }

    #[test]
    fn recorder_keeps_order() {
        let mut alerts = RecordingAlerts::new();
        let log = alerts.clone();
        alerts.alert("first");
        alerts.alert("second");
        assert_eq!(log.messages(), vec!["first", "second"]);
    }
}
