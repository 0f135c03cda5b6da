//! Testing utilities and mock implementations.
//!
//! Provides mock implementations of the ticket submission seams so forms
//! and HTTP handlers can be exercised without a real ticket service.
//!
//! # Example
//!
//! ```rust,ignore
//! use campusdesk_core::testing::{MockTicketSubmitter, RecordingNotifier};
//!
//! let submitter = MockTicketSubmitter::new();
//! let notifier = RecordingNotifier::new();
//!
//! submitter.set_next_error(SubmitError::Network("connection reset".into())).await;
//! let result = form.submit(&submitter, &notifier).await;
//! assert!(result.is_err());
//! assert_eq!(submitter.submit_count().await, 1);
//! ```

mod mock_submitter;
mod recording_notifier;

pub use mock_submitter::{MockTicketSubmitter, RecordedSubmission};
pub use recording_notifier::RecordingNotifier;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::department::CANONICAL_DEPARTMENTS;
    use crate::ticket::{TicketCategory, TicketFields};
    use crate::timeline::{ApprovalRecord, ApprovalStatus};

    /// A ticket form with every required field filled in.
    pub fn complete_ticket() -> TicketFields {
        TicketFields {
            subject: "Transcript request delayed".to_string(),
            description: "Requested an official transcript three weeks ago".to_string(),
            category: Some(TicketCategory::Academic),
            department: "examination".to_string(),
            contact_email: "student@example.edu".to_string(),
            contact_phone: "+1 555 0100".to_string(),
            related_to: "REQ-2026-0042".to_string(),
            ..Default::default()
        }
    }

    /// One coded record per canonical department, all with the same status.
    pub fn uniform_records(status: ApprovalStatus) -> Vec<ApprovalRecord> {
        CANONICAL_DEPARTMENTS
            .iter()
            .map(|d| ApprovalRecord::coded(d.id, d.name, status))
            .collect()
    }

    /// A coded record for a canonical department id.
    pub fn coded_record(id: &str, status: ApprovalStatus) -> ApprovalRecord {
        let name = CANONICAL_DEPARTMENTS
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name)
            .unwrap_or(id);
        ApprovalRecord::coded(id, name, status)
    }
}
