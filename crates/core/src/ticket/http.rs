//! HTTP ticket submitter.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::TicketEndpointConfig;

use super::submitter::{SubmitError, SubmitResponse, TicketSubmitter};
use super::types::TicketPayload;

/// Message used when the service rejects a ticket without saying why.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to submit ticket";

/// Posts tickets as JSON to the configured endpoint.
///
/// One request per submission: no timeout, no retry.
pub struct HttpTicketSubmitter {
    client: Client,
    endpoint: String,
}

impl HttpTicketSubmitter {
    pub fn new(config: &TicketEndpointConfig) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .build()
            .map_err(|e| SubmitError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TicketSubmitter for HttpTicketSubmitter {
    fn name(&self) -> &str {
        "http"
    }

    async fn submit(&self, payload: &TicketPayload) -> Result<SubmitResponse, SubmitError> {
        debug!(
            endpoint = %self.endpoint,
            ticket_id = %payload.ticket_id,
            "Posting ticket"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<SubmitResponse>()
                .await
                .ok()
                .and_then(|body| body.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string());

            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<SubmitResponse>()
            .await
            .map_err(|e| SubmitError::InvalidResponse(e.to_string()))
    }
}
