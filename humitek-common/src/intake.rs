//! Lead-intake gateway seam and the submission flow built on it

use thiserror::Error;
use tracing::{debug, info};

use crate::lead::{FieldErrors, LeadSubmission};

/// Simulated network round trip of the mock gateway, in milliseconds.
pub const MOCK_SUBMIT_DELAY_MS: u64 = 600;

/// Failure reported by the lead-intake backend.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("lead intake unreachable: {0}")]
    Unreachable(String),

    #[error("lead intake refused the request: {0}")]
    Backend(String),
}

/// Outcome of a submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The lead was accepted by the gateway.
    Accepted,
    /// Validation failed; nothing was sent.
    Rejected(FieldErrors),
    /// The gateway failed; the form should stay editable with a retry.
    Failed(IntakeError),
}

/// External collaborator that receives validated leads.
///
/// The production implementation posts to the lead-intake endpoint; the
/// mock below sleeps through a fixed delay and accepts everything.
#[allow(async_fn_in_trait)]
pub trait LeadGateway {
    async fn submit_lead(&self, lead: &LeadSubmission) -> Result<(), IntakeError>;
}

/// Mock gateway: logs the lead payload and resolves after a fixed delay.
#[derive(Clone, Copy, Debug)]
pub struct MockLeadGateway {
    delay_ms: u64,
}

impl Default for MockLeadGateway {
    fn default() -> Self {
        Self {
            delay_ms: MOCK_SUBMIT_DELAY_MS,
        }
    }
}

impl MockLeadGateway {
    /// Mock with a custom delay. Tests use 0.
    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl LeadGateway for MockLeadGateway {
    async fn submit_lead(&self, lead: &LeadSubmission) -> Result<(), IntakeError> {
        match serde_json::to_string(lead) {
            Ok(payload) => debug!("lead payload: {payload}"),
            Err(e) => debug!("lead payload not serializable: {e}"),
        }
        sleep_ms(self.delay_ms).await;
        info!("lead accepted for {}", lead.name.trim());
        Ok(())
    }
}

/// Validate `lead` and forward it to `gateway`.
///
/// Validation failures short-circuit: the gateway is never called and the
/// caller gets every failing field at once.
pub async fn submit<G: LeadGateway>(lead: &LeadSubmission, gateway: &G) -> SubmitOutcome {
    let errors = lead.validate();
    if !errors.is_empty() {
        return SubmitOutcome::Rejected(errors);
    }
    match gateway.submit_lead(lead).await {
        Ok(()) => SubmitOutcome::Accepted,
        Err(e) => SubmitOutcome::Failed(e),
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn valid_lead() -> LeadSubmission {
        LeadSubmission {
            name: "Jean Dupont".to_string(),
            phone: "06 12 34 56 78".to_string(),
            email: "jean@exemple.fr".to_string(),
            zip: "33000".to_string(),
            gdpr_consent: true,
            ..Default::default()
        }
    }

    #[derive(Default)]
    struct RecordingGateway {
        calls: Cell<usize>,
        last: RefCell<Option<LeadSubmission>>,
    }

    impl LeadGateway for RecordingGateway {
        async fn submit_lead(&self, lead: &LeadSubmission) -> Result<(), IntakeError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(lead.clone());
            Ok(())
        }
    }

    struct FailingGateway;

    impl LeadGateway for FailingGateway {
        async fn submit_lead(&self, _lead: &LeadSubmission) -> Result<(), IntakeError> {
            Err(IntakeError::Unreachable("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_valid_lead_reaches_gateway_once() {
        let gateway = RecordingGateway::default();
        let lead = valid_lead();
        let outcome = submit(&lead, &gateway).await;
        assert!(matches!(outcome, SubmitOutcome::Accepted));
        assert_eq!(gateway.calls.get(), 1);
        assert_eq!(gateway.last.borrow().as_ref(), Some(&lead));
    }

    #[tokio::test]
    async fn test_invalid_lead_never_reaches_gateway() {
        let gateway = RecordingGateway::default();
        let outcome = submit(&LeadSubmission::default(), &gateway).await;
        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.name, Some("Nom requis"));
                assert_eq!(errors.phone, Some("Téléphone requis"));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert_eq!(gateway.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_gateway_failure_surfaces() {
        let outcome = submit(&valid_lead(), &FailingGateway).await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(IntakeError::Unreachable(_))
        ));
    }

    #[tokio::test]
    async fn test_mock_gateway_accepts() {
        let gateway = MockLeadGateway::with_delay_ms(0);
        let outcome = submit(&valid_lead(), &gateway).await;
        assert!(matches!(outcome, SubmitOutcome::Accepted));
    }
}
