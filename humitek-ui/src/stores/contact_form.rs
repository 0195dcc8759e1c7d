//! Contact form UI state store

use humitek_common::FieldErrors;

/// UI state of the contact form.
///
/// Created fresh per page load and mutated only by the form controller.
/// `submitting` is true exactly between [`begin_submit`](Self::begin_submit)
/// and the outcome transition; rejected attempts never enter the in-flight
/// state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    /// True only while the gateway round trip is in flight.
    pub submitting: bool,
    pub errors: FieldErrors,
    /// Show the inline confirmation after an accepted submission.
    pub confirmed: bool,
    /// Gateway failure message; the form stays editable for a retry.
    pub failure: Option<String>,
}

impl ContactFormState {
    /// Drop the previous attempt's outcome before a new one.
    pub fn reset_outcome(&mut self) {
        self.errors = FieldErrors::default();
        self.confirmed = false;
        self.failure = None;
    }

    /// Validation failed: record every field error. The attempt never went
    /// in flight, so this also pins `submitting` to false.
    pub fn reject(&mut self, errors: FieldErrors) {
        self.submitting = false;
        self.errors = errors;
    }

    /// Enter the in-flight state for the gateway round trip.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
    }

    /// Accepted: leave the in-flight state and show the confirmation.
    pub fn complete(&mut self) {
        self.submitting = false;
        self.confirmed = true;
    }

    /// Gateway failure: leave the in-flight state, keep the form editable.
    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.failure = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_error() -> FieldErrors {
        FieldErrors {
            name: Some("Nom requis"),
            ..Default::default()
        }
    }

    #[test]
    fn test_reject_never_enters_in_flight() {
        let mut state = ContactFormState::default();
        state.reset_outcome();
        state.reject(name_error());
        assert!(!state.submitting);
        assert_eq!(state.errors, name_error());
    }

    #[test]
    fn test_accepted_round_trip() {
        let mut state = ContactFormState::default();
        state.reset_outcome();
        state.begin_submit();
        assert!(state.submitting);
        state.complete();
        assert!(!state.submitting);
        assert!(state.confirmed);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_failure_leaves_form_editable() {
        let mut state = ContactFormState::default();
        state.begin_submit();
        state.fail("lead intake unreachable: offline".to_string());
        assert!(!state.submitting);
        assert!(!state.confirmed);
        assert_eq!(
            state.failure.as_deref(),
            Some("lead intake unreachable: offline")
        );
    }

    #[test]
    fn test_reset_outcome_clears_previous_attempt() {
        let mut state = ContactFormState {
            errors: name_error(),
            confirmed: true,
            failure: Some("old".to_string()),
            ..Default::default()
        };
        state.reset_outcome();
        assert!(state.errors.is_empty());
        assert!(!state.confirmed);
        assert!(state.failure.is_none());
    }
}
