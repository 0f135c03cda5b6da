//! Ticket form data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the ticket is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    Academic,
    Administrative,
    Financial,
    Hostel,
    Library,
    Technical,
    Other,
}

/// How urgent the requester considers the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// Status stamped on every newly submitted ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
}

/// Values currently entered in the ticket form.
///
/// `Default` is the form's initial state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TicketFields {
    pub subject: String,
    pub description: String,
    pub category: Option<TicketCategory>,
    pub priority: TicketPriority,
    pub department: String,
    pub contact_email: String,
    pub contact_phone: String,
    /// Free-text reference to a related request, e.g. an application number.
    pub related_to: String,
}

/// Fields that must be filled before the form can be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Subject,
    Description,
    Category,
    ContactEmail,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Subject => "subject",
            RequiredField::Description => "description",
            RequiredField::Category => "category",
            RequiredField::ContactEmail => "contactEmail",
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(RequiredField),
}

impl TicketFields {
    /// Check required fields, reporting the first one left empty.
    ///
    /// Only presence is checked; email and phone formats are not.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = if self.subject.is_empty() {
            Some(RequiredField::Subject)
        } else if self.description.is_empty() {
            Some(RequiredField::Description)
        } else if self.category.is_none() {
            Some(RequiredField::Category)
        } else if self.contact_email.is_empty() {
            Some(RequiredField::ContactEmail)
        } else {
            None
        };

        match missing {
            Some(field) => Err(ValidationError::MissingField(field)),
            None => Ok(()),
        }
    }
}

/// JSON body sent to the remote ticket service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPayload {
    #[serde(flatten)]
    pub fields: TicketFields,
    pub created_at: DateTime<Utc>,
    /// Provisional id generated on this side from the submission time.
    pub ticket_id: String,
    pub status: TicketStatus,
}

impl TicketPayload {
    pub fn new(fields: TicketFields, now: DateTime<Utc>) -> Self {
        Self {
            fields,
            created_at: now,
            ticket_id: format!("TKT-{}", now.timestamp_millis()),
            status: TicketStatus::Open,
        }
    }
}
