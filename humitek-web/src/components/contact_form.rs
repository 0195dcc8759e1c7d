//! Contact form controller - owns form state, delegates UI to ContactFormView

use dioxus::prelude::*;
use humitek_common::{intake, LeadSubmission, MockLeadGateway, Problem, SubmitOutcome};
use humitek_ui::stores::ContactFormState;
use humitek_ui::ContactFormView;
use tracing::debug;

/// Contact form wired to the mock lead gateway.
///
/// Validation runs synchronously on submit; only a valid lead enters the
/// in-flight state and awaits the gateway. The submit button stays disabled
/// while `submitting` is true, which is the only duplicate-submission guard.
#[component]
pub fn ContactForm() -> Element {
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut zip = use_signal(String::new);
    let mut problem = use_signal(|| Option::<Problem>::None);
    let mut slot = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut consent = use_signal(|| false);
    let mut state = use_signal(ContactFormState::default);

    let on_submit = move |_| {
        if state.read().submitting {
            return;
        }
        // The checkbox is `required`, so the browser already blocks
        // unchecked submits; guard again for programmatic calls.
        if !consent() {
            return;
        }

        state.write().reset_outcome();
        let lead = LeadSubmission {
            name: name(),
            phone: phone(),
            email: email(),
            zip: zip(),
            problem: problem(),
            slot: slot(),
            message: message(),
            gdpr_consent: consent(),
        };

        let errors = lead.validate();
        if !errors.is_empty() {
            debug!("lead rejected by validation: {errors:?}");
            state.write().reject(errors);
            return;
        }

        state.write().begin_submit();
        spawn(async move {
            match intake::submit(&lead, &MockLeadGateway::default()).await {
                SubmitOutcome::Accepted => {
                    state.write().complete();
                    name.set(String::new());
                    phone.set(String::new());
                    email.set(String::new());
                    zip.set(String::new());
                    problem.set(None);
                    slot.set(String::new());
                    message.set(String::new());
                    consent.set(false);
                }
                SubmitOutcome::Rejected(errors) => state.write().reject(errors),
                SubmitOutcome::Failed(e) => state.write().fail(e.to_string()),
            }
        });
    };

    let current = state.read().clone();

    rsx! {
        ContactFormView {
            name: name(),
            phone: phone(),
            email: email(),
            zip: zip(),
            problem: problem(),
            slot: slot(),
            message: message(),
            consent: consent(),
            submitting: current.submitting,
            errors: current.errors,
            confirmed: current.confirmed,
            failure: current.failure,
            on_name_change: move |v| name.set(v),
            on_phone_change: move |v| phone.set(v),
            on_email_change: move |v| email.set(v),
            on_zip_change: move |v| zip.set(v),
            on_problem_change: move |v| problem.set(v),
            on_slot_change: move |v| slot.set(v),
            on_message_change: move |v| message.set(v),
            on_consent_change: move |v| consent.set(v),
            on_submit,
        }
    }
}
