//! Contact submission port and its simulated implementation.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, warn};

use super::{Ack, ContactFormSubmission, ContactValidator, SubmitError};

/// Delivers a contact submission somewhere.
///
/// Implementations validate again before accepting; callers may still
/// validate first to re-render the form without a round trip.
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    /// Submits `submission`, returning a receipt on acceptance.
    async fn submit(&self, submission: ContactFormSubmission) -> Result<Ack, SubmitError>;
}

/// Accepts valid submissions after a fixed delay and only logs them.
///
/// Nothing is transmitted or stored. Dropping the returned future cancels
/// the pending delay.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    validator: ContactValidator,
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Creates a submitter that waits `delay` before acknowledging.
    #[must_use]
    pub fn new(validator: ContactValidator, delay: Duration) -> Self {
        Self { validator, delay }
    }

    /// The simulated latency.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, submission: ContactFormSubmission) -> Result<Ack, SubmitError> {
        let errors = self.validator.validate(&submission);
        if !errors.is_empty() {
            warn!(fields = errors.len(), "Rejected contact submission: {}", errors);
            return Err(SubmitError::Invalid(errors));
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let ack = Ack::new();
        info!(
            id = %ack.id,
            name = %submission.name.trim(),
            email = %submission.email,
            subject = %submission.subject.trim(),
            service = submission.service().unwrap_or("-"),
            "Contact submission accepted (simulated, not delivered)"
        );
        Ok(ack)
    }
}
