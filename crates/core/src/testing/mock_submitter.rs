//! Mock ticket submitter for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::ticket::{SubmitError, SubmitResponse, TicketPayload, TicketSubmitter};

/// A recorded submission for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedSubmission {
    pub payload: TicketPayload,
    pub timestamp: Instant,
}

/// Mock implementation of the TicketSubmitter trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable response
/// - Record submitted payloads
/// - Simulate failures and slow services
#[derive(Debug, Default)]
pub struct MockTicketSubmitter {
    /// Response returned on success.
    response: Arc<RwLock<SubmitResponse>>,
    /// If set, the next submission fails with this error.
    next_error: Arc<RwLock<Option<SubmitError>>>,
    /// If set, every submission fails with this error.
    persistent_error: Arc<RwLock<Option<SubmitError>>>,
    /// Artificial latency before answering.
    delay: Arc<RwLock<Option<Duration>>>,
    submissions: Arc<RwLock<Vec<RecordedSubmission>>>,
}

impl MockTicketSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, response: SubmitResponse) {
        *self.response.write().await = response;
    }

    /// Fail only the next submission.
    pub async fn set_next_error(&self, error: SubmitError) {
        *self.next_error.write().await = Some(error);
    }

    /// Fail every submission until cleared.
    pub async fn set_persistent_error(&self, error: Option<SubmitError>) {
        *self.persistent_error.write().await = error;
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub async fn submit_count(&self) -> usize {
        self.submissions.read().await.len()
    }

    pub async fn recorded_payloads(&self) -> Vec<TicketPayload> {
        self.submissions
            .read()
            .await
            .iter()
            .map(|s| s.payload.clone())
            .collect()
    }

    pub async fn recorded_submissions(&self) -> Vec<RecordedSubmission> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl TicketSubmitter for MockTicketSubmitter {
    fn name(&self) -> &str {
        "mock"
    }

    async fn submit(&self, payload: &TicketPayload) -> Result<SubmitResponse, SubmitError> {
        self.submissions.write().await.push(RecordedSubmission {
            payload: payload.clone(),
            timestamp: Instant::now(),
        });

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }
        if let Some(error) = self.persistent_error.read().await.clone() {
            return Err(error);
        }

        Ok(self.response.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;
    use chrono::Utc;

    #[tokio::test]
    async fn test_records_and_fails_once() {
        let submitter = MockTicketSubmitter::new();
        submitter
            .set_next_error(SubmitError::Network("reset".to_string()))
            .await;
        let payload = TicketPayload::new(fixtures::complete_ticket(), Utc::now());

        assert!(submitter.submit(&payload).await.is_err());
        assert!(submitter.submit(&payload).await.is_ok());
        assert_eq!(submitter.submit_count().await, 2);
    }

    #[tokio::test]
    async fn test_persistent_error() {
        let submitter = MockTicketSubmitter::new();
        submitter
            .set_persistent_error(Some(SubmitError::Network("down".to_string())))
            .await;
        let payload = TicketPayload::new(fixtures::complete_ticket(), Utc::now());

        assert!(submitter.submit(&payload).await.is_err());
        assert!(submitter.submit(&payload).await.is_err());

        submitter.set_persistent_error(None).await;
        assert!(submitter.submit(&payload).await.is_ok());
    }
}
