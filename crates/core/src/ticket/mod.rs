//! Support ticket form and submission to the remote ticket service.

mod form;
mod http;
mod notifier;
mod submitter;
mod types;

pub use form::{SubmitReceipt, TicketForm};
pub use http::{HttpTicketSubmitter, FALLBACK_FAILURE_MESSAGE};
pub use notifier::{LogNotifier, Notice, Notifier};
pub use submitter::{SubmitError, SubmitResponse, TicketSubmitter};
pub use types::{
    RequiredField, TicketCategory, TicketFields, TicketPayload, TicketPriority, TicketStatus,
    ValidationError,
};
