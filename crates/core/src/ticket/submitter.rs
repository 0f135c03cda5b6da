//! Submission seam between the ticket form and the remote service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{TicketPayload, ValidationError};

/// Errors that can occur while submitting a ticket.
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    #[error("A submission is already in progress")]
    InFlight,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The service answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl SubmitError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::InFlight => "in_flight",
            SubmitError::Invalid(_) => "invalid",
            SubmitError::Rejected { .. } => "rejected",
            SubmitError::Network(_) => "network",
            SubmitError::InvalidResponse(_) => "invalid_response",
            SubmitError::Client(_) => "client",
        }
    }
}

/// Body the ticket service returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Id assigned by the service, if it assigns one.
    #[serde(default, alias = "id", skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
}

/// Sends a ticket payload to wherever tickets are handled.
#[async_trait]
pub trait TicketSubmitter: Send + Sync {
    /// Name of this submitter for logging.
    fn name(&self) -> &str;

    /// Make exactly one attempt to deliver the payload.
    async fn submit(&self, payload: &TicketPayload) -> Result<SubmitResponse, SubmitError>;
}
