//! Submission guard for the identifier form.
//!
//! [`on_submit_attempt`] is the whole decision. [`SubmissionGuard`] is the
//! binding that turns a decision into effects on the host's elements:
//! a rejected attempt cancels the submit event and raises one alert, an
//! accepted one leaves the event alone and flips the submit button into its
//! in-progress state.

pub mod elements;

pub use elements::{ButtonElement, InputElement, RecordedAlerts, SubmitEventState};

use crate::domain::FacebookId;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FIELD_ID: &str = "facebook_id";
pub const REJECT_MESSAGE: &str = "Please enter a valid Facebook ID (numeric ID or username).";
pub const IN_PROGRESS_LABEL: &str = "Analyzing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    /// Accept exactly when the candidate parsed as a Facebook id.
    pub fn of(parsed: &Result<FacebookId, CoreError>) -> Self {
        match parsed {
            Ok(_) => Decision::Accept,
            Err(_) => Decision::Reject,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Accept => "accept",
            Decision::Reject => "reject",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn on_submit_attempt(candidate: &str) -> Decision {
    Decision::of(&FacebookId::parse(candidate))
}

pub trait TextField {
    fn value(&self) -> String;
}

pub trait SubmitControl {
    fn set_disabled(&mut self, disabled: bool);
    fn set_label(&mut self, label: &str);
    fn is_disabled(&self) -> bool;
    fn label(&self) -> String;
}

/// Blocking user notification.
pub trait Alert {
    fn alert(&mut self, message: &str);
}

pub trait SubmitEvent {
    fn prevent_default(&mut self);
    fn default_prevented(&self) -> bool;
}

impl<T: TextField + ?Sized> TextField for &T {
    fn value(&self) -> String {
        (**self).value()
    }
}

impl<T: SubmitControl + ?Sized> SubmitControl for &mut T {
    fn set_disabled(&mut self, disabled: bool) {
        (**self).set_disabled(disabled);
    }

    fn set_label(&mut self, label: &str) {
        (**self).set_label(label);
    }

    fn is_disabled(&self) -> bool {
        (**self).is_disabled()
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

impl<T: Alert + ?Sized> Alert for &mut T {
    fn alert(&mut self, message: &str) {
        (**self).alert(message);
    }
}

/// Binds the decision to one form's field, submit button and alert sink.
///
/// The guard holds handles, not the elements themselves; pass `&field` and
/// `&mut button` to keep ownership with the caller.
pub struct SubmissionGuard<F, B, A> {
    field: F,
    button: B,
    alert: A,
}

impl<F, B, A> SubmissionGuard<F, B, A>
where
    F: TextField,
    B: SubmitControl,
    A: Alert,
{
    pub fn new(field: F, button: B, alert: A) -> Self {
        Self {
            field,
            button,
            alert,
        }
    }

    /// Runs one submission attempt against the current field content.
    pub fn handle_submit<E: SubmitEvent + ?Sized>(&mut self, event: &mut E) -> Decision {
        let candidate = self.field.value();
        let decision = on_submit_attempt(&candidate);
        match decision {
            Decision::Reject => {
                event.prevent_default();
                self.alert.alert(REJECT_MESSAGE);
            }
            Decision::Accept => {
                self.button.set_disabled(true);
                self.button.set_label(IN_PROGRESS_LABEL);
            }
        }
        decision
    }

    pub fn button(&self) -> &B {
        &self.button
    }
}

#[cfg(test)]
mod tests {
    use super::{
        on_submit_attempt, ButtonElement, Decision, InputElement, RecordedAlerts,
        SubmissionGuard, SubmitControl, SubmitEvent, SubmitEventState, IN_PROGRESS_LABEL,
        REJECT_MESSAGE,
    };

    fn submit(value: &str) -> (Decision, ButtonElement, RecordedAlerts, SubmitEventState) {
        let field = InputElement::new(value);
        let mut button = ButtonElement::new("Analyze");
        let mut alerts = RecordedAlerts::default();
        let mut event = SubmitEventState::default();
        let decision = {
            let mut guard = SubmissionGuard::new(&field, &mut button, &mut alerts);
            guard.handle_submit(&mut event)
        };
        (decision, button, alerts, event)
    }

    #[test]
    fn on_submit_attempt_accepts_numeric_ids() {
        for raw in ["0", "00042", "100004123456789", "  12345  "] {
            assert_eq!(on_submit_attempt(raw), Decision::Accept, "{raw:?}");
        }
    }

    #[test]
    fn on_submit_attempt_accepts_usernames() {
        for raw in ["john.doe123", "Zuck", ".", "a.b.c", "\tjohn.doe\n"] {
            assert_eq!(on_submit_attempt(raw), Decision::Accept, "{raw:?}");
        }
    }

    #[test]
    fn on_submit_attempt_rejects_blank() {
        for raw in ["", " ", "\t\r\n", "\u{a0}"] {
            assert_eq!(on_submit_attempt(raw), Decision::Reject, "{raw:?}");
        }
    }

    #[test]
    fn on_submit_attempt_rejects_outside_characters() {
        for raw in ["john doe", "user@name", "#tag", "user_name", "name!", "ímé"] {
            assert_eq!(on_submit_attempt(raw), Decision::Reject, "{raw:?}");
        }
    }

    #[test]
    fn handle_submit_accept_disables_button() {
        let (decision, button, alerts, event) = submit("100004123456789");
        assert_eq!(decision, Decision::Accept);
        assert!(button.is_disabled());
        assert_eq!(button.label(), IN_PROGRESS_LABEL);
        assert!(alerts.messages().is_empty());
        assert!(!event.default_prevented());
    }

    #[test]
    fn handle_submit_reject_alerts_and_prevents_default() {
        let (decision, button, alerts, event) = submit("john doe");
        assert_eq!(decision, Decision::Reject);
        assert!(event.default_prevented());
        assert_eq!(alerts.messages(), [REJECT_MESSAGE.to_string()]);
        assert!(!button.is_disabled());
        assert_eq!(button.label(), "Analyze");
    }

    #[test]
    fn handle_submit_reads_current_field_value() {
        let mut field = InputElement::new("user@name");
        let mut button = ButtonElement::new("Analyze");
        let mut alerts = RecordedAlerts::default();

        let mut first = SubmitEventState::default();
        SubmissionGuard::new(&field, &mut button, &mut alerts).handle_submit(&mut first);
        assert!(first.default_prevented());

        field.set_value("username");
        let mut second = SubmitEventState::default();
        let decision =
            SubmissionGuard::new(&field, &mut button, &mut alerts).handle_submit(&mut second);
        assert_eq!(decision, Decision::Accept);
        assert!(!second.default_prevented());
        assert_eq!(alerts.messages().len(), 1);
        assert!(button.is_disabled());
    }

    #[test]
    fn guard_keeps_button_passed_by_value() {
        let field = InputElement::new("  00042 ");
        let mut guard = SubmissionGuard::new(
            &field,
            ButtonElement::new("Analyze"),
            RecordedAlerts::default(),
        );

        let mut event = SubmitEventState::default();
        assert_eq!(guard.handle_submit(&mut event), Decision::Accept);
        assert!(guard.button().is_disabled());
        assert_eq!(guard.button().label(), IN_PROGRESS_LABEL);
    }

    #[test]
    fn decision_serializes_lowercase() {
        let json = serde_json::to_string(&Decision::Reject).unwrap();
        assert_eq!(json, "\"reject\"");
    }
}
