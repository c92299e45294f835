//! The CSV Extension Guard component.
//!
//! Watches the file-selection control and rejects any committed selection
//! whose filename does not end in `.csv`: the user sees a blocking alert and
//! the control is reset to empty, synchronously, before the handler returns.
//! Accepted selections are left untouched.

use log::debug;

use crate::element::{AlertSink, InputElement};
use crate::event::ChangeEvent;
use crate::selection::{CSV_ONLY_ALERT, SelectionOutcome, screen};

/// Guard bound to a file-selection control and an alert sink.
///
/// Holds no state beyond the element handles; every decision is made from
/// the event payload alone.
#[derive(Debug)]
pub struct CsvGuard<I, A> {
    file: I,
    alerts: A,
}

impl<I: InputElement, A: AlertSink> CsvGuard<I, A> {
    /// Bind the guard to its element handles.
    pub fn bind(file: I, alerts: A) -> Self {
        Self { file, alerts }
    }

    /// Handle a committed change of the file selection.
    ///
    /// On rejection, alerts first and then clears the control, matching the
    /// page's original ordering.
    pub fn on_change(&mut self, event: &ChangeEvent) -> SelectionOutcome {
        let outcome = screen(&event.value);
        match outcome {
            SelectionOutcome::Accepted => {
                debug!("accepted file selection {:?}", event.value);
            }
            SelectionOutcome::Rejected => {
                debug!("rejected file selection {:?}", event.value);
                self.alerts.alert(CSV_ONLY_ALERT);
                self.file.set_value("");
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{MemoryInput, RecordingAlerts};

    fn guard_with(value: &str) -> (CsvGuard<MemoryInput, RecordingAlerts>, MemoryInput, RecordingAlerts) {
        let file = MemoryInput::with_value(value);
        let alerts = RecordingAlerts::new();
        let guard = CsvGuard::bind(file.clone(), alerts.clone());
        (guard, file, alerts)
    }

    #[test]
    fn csv_selection_passes_untouched() {
        let (mut guard, file, alerts) = guard_with("trip.csv");
        let outcome = guard.on_change(&ChangeEvent::new("trip.csv"));
        assert!(outcome.is_accepted());
        assert_eq!(file.value(), "trip.csv");
        assert!(alerts.messages().is_empty());
    }

    #[test]
    fn non_csv_selection_alerts_and_clears() {
        let (mut guard, file, alerts) = guard_with("trip.txt");
        let outcome = guard.on_change(&ChangeEvent::new("trip.txt"));
        assert!(!outcome.is_accepted());
        assert_eq!(file.value(), "");
        assert_eq!(alerts.messages(), vec![CSV_ONLY_ALERT]);
    }

    #[test]
    fn uppercase_suffix_is_rejected() {
        let (mut guard, file, alerts) = guard_with("report.CSV");
        guard.on_change(&ChangeEvent::new("report.CSV"));
        assert_eq!(file.value(), "");
        assert_eq!(alerts.messages(), vec![CSV_ONLY_ALERT]);
    }

    #[test]
    fn empty_selection_is_rejected_and_stays_empty() {
        let (mut guard, file, alerts) = guard_with("");
        let outcome = guard.on_change(&ChangeEvent::new(""));
        assert!(!outcome.is_accepted());
        assert_eq!(file.value(), "");
        assert_eq!(alerts.messages().len(), 1);
    }

    #[test]
    fn each_rejection_alerts_again() {
        let (mut guard, _file, alerts) = guard_with("");
        guard.on_change(&ChangeEvent::new("a.txt"));
        guard.on_change(&ChangeEvent::new("b.pdf"));
        assert_eq!(alerts.messages().len(), 2);
    }
}
