//! Ticket form state and submit flow.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::metrics::{TICKET_SUBMISSIONS, TICKET_SUBMIT_DURATION};

use super::notifier::{Notice, Notifier};
use super::submitter::{SubmitError, TicketSubmitter};
use super::types::{TicketFields, TicketPayload};

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Id assigned by the service, or the provisional id when it assigned none.
    pub ticket_id: String,
    /// Id generated on this side and sent in the payload.
    pub provisional_id: String,
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// A single ticket form instance.
///
/// Holds the entered field values and allows at most one submission in
/// flight at a time.
#[derive(Debug, Default)]
pub struct TicketForm {
    fields: RwLock<TicketFields>,
    submitting: AtomicBool,
}

/// Clears the submitting flag when dropped, whatever path the submit took.
struct SubmittingGuard<'a>(&'a AtomicBool);

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl TicketForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: TicketFields) -> Self {
        Self {
            fields: RwLock::new(fields),
            submitting: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current field values.
    pub async fn fields(&self) -> TicketFields {
        self.fields.read().await.clone()
    }

    /// Edit field values in place.
    pub async fn update<F>(&self, edit: F)
    where
        F: FnOnce(&mut TicketFields),
    {
        edit(&mut *self.fields.write().await);
    }

    /// Restore every field to its initial value.
    pub async fn reset(&self) {
        *self.fields.write().await = TicketFields::default();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Submit the current field values.
    ///
    /// An invalid form is refused before any request is made and raises no
    /// notice. Otherwise exactly one submission attempt is made: on success
    /// the fields are reset, on failure they are kept so the user can retry.
    pub async fn submit(
        &self,
        submitter: &dyn TicketSubmitter,
        notifier: &dyn Notifier,
    ) -> Result<SubmitReceipt, SubmitError> {
        let result = self.submit_inner(submitter, notifier).await;
        let label = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        TICKET_SUBMISSIONS.with_label_values(&[label]).inc();
        result
    }

    async fn submit_inner(
        &self,
        submitter: &dyn TicketSubmitter,
        notifier: &dyn Notifier,
    ) -> Result<SubmitReceipt, SubmitError> {
        let _guard = SubmittingGuard::acquire(&self.submitting).ok_or(SubmitError::InFlight)?;

        let fields = self.fields().await;
        fields.validate()?;

        let now = Utc::now();
        let payload = TicketPayload::new(fields, now);
        let start = Instant::now();

        let outcome = submitter.submit(&payload).await;
        TICKET_SUBMIT_DURATION.observe(start.elapsed().as_secs_f64());

        match outcome {
            Ok(response) => {
                let receipt = SubmitReceipt {
                    ticket_id: response
                        .ticket_id
                        .unwrap_or_else(|| payload.ticket_id.clone()),
                    provisional_id: payload.ticket_id,
                    message: response.message,
                    submitted_at: now,
                };
                info!(
                    submitter = submitter.name(),
                    ticket_id = %receipt.ticket_id,
                    "Ticket submitted"
                );

                notifier.notify(&Notice::Success {
                    ticket_id: receipt.ticket_id.clone(),
                    message: receipt.message.clone(),
                });
                self.reset().await;
                Ok(receipt)
            }
            Err(e) => {
                error!(
                    submitter = submitter.name(),
                    ticket_id = %payload.ticket_id,
                    error = %e,
                    "Ticket submission failed"
                );
                notifier.notify(&Notice::Failure {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }
}
