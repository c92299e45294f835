//! Startup errors for page binding.
//!
//! The only failures this system can hit are at initialization, when a front
//! end resolves the fixed element identifiers against the host page. Those
//! fail fast and loudly; a page missing one of its elements must never bind
//! as a silent no-op.

use std::fmt;

/// An error produced while binding components to a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Identifier of the element involved.
    pub element_id: String,
}

impl PageError {
    /// No element with `element_id` exists in the document.
    #[must_use]
    pub fn missing_element(element_id: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::MissingElement,
            element_id: element_id.into(),
        }
    }

    /// The element with `element_id` is not an input control.
    #[must_use]
    pub fn not_an_input(element_id: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::NotAnInput,
            element_id: element_id.into(),
        }
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::MissingElement => {
                write!(f, "element `{}` not found in document", self.element_id)
            }
            ErrorKind::NotAnInput => {
                write!(f, "element `{}` is not an input control", self.element_id)
            }
        }
    }
}

impl std::error::Error for PageError {}

/// Categories of page-binding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Element lookup by identifier returned nothing.
    MissingElement,
    /// Element exists but has the wrong role (e.g. a `<div>` where an
    /// `<input>` is required).
    NotAnInput,
}

/// Convenience type alias for results using [`PageError`].
pub type PageResult<T> = Result<T, PageError>;
