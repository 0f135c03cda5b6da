//! Ticket form API handlers.

use axum::{extract::State, http::StatusCode, Json};
use campusdesk_core::{SubmitError, SubmitReceipt, TicketFields, TicketForm, ValidationError};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response for a submitted ticket
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketReceiptResponse {
    pub ticket_id: String,
    pub provisional_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub submitted_at: String,
}

impl From<SubmitReceipt> for TicketReceiptResponse {
    fn from(receipt: SubmitReceipt) -> Self {
        Self {
            ticket_id: receipt.ticket_id,
            provisional_id: receipt.provisional_id,
            message: receipt.message,
            submitted_at: receipt.submitted_at.to_rfc3339(),
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct TicketErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Submit the ticket form to the configured ticket service
pub async fn submit_ticket(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<TicketFields>,
) -> Result<(StatusCode, Json<TicketReceiptResponse>), (StatusCode, Json<TicketErrorResponse>)> {
    let form = TicketForm::with_fields(fields);

    match form.submit(state.submitter(), state.notifier()).await {
        Ok(receipt) => Ok((StatusCode::CREATED, Json(receipt.into()))),
        Err(SubmitError::Invalid(ValidationError::MissingField(field))) => {
            debug!(field = %field, "Ticket form incomplete");
            Err((
                StatusCode::BAD_REQUEST,
                Json(TicketErrorResponse {
                    error: format!("Missing required field: {}", field),
                    field: Some(field.to_string()),
                }),
            ))
        }
        Err(SubmitError::InFlight) => Err((
            StatusCode::CONFLICT,
            Json(TicketErrorResponse {
                error: SubmitError::InFlight.to_string(),
                field: None,
            }),
        )),
        Err(e) => Err((
            StatusCode::BAD_GATEWAY,
            Json(TicketErrorResponse {
                error: e.to_string(),
                field: None,
            }),
        )),
    }
}
