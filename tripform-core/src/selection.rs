//! File-selection screening for the CSV upload control.
//!
//! The check is a literal, case-sensitive suffix match: `report.CSV` is
//! rejected just like `report.txt`. The empty string (no selection) is
//! rejected too, since it does not end in `.csv`.

/// The accepted filename suffix, matched case-sensitively.
pub const CSV_SUFFIX: &str = ".csv";

/// Alert text shown when a selection is rejected.
pub const CSV_ONLY_ALERT: &str = "Please upload CSV files only!";

/// The result of screening one file selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The filename ends in `.csv`; the selection stands.
    Accepted,
    /// The filename does not end in `.csv`; the control must be cleared.
    Rejected,
}

impl SelectionOutcome {
    /// `true` for [`SelectionOutcome::Accepted`].
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Screen a committed file-selection value.
#[must_use]
pub fn screen(file_name: &str) -> SelectionOutcome {
    if file_name.ends_with(CSV_SUFFIX) {
        SelectionOutcome::Accepted
    } else {
        SelectionOutcome::Rejected
    }
}
