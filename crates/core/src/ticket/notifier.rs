//! User-facing notices raised after a submission attempt.

use tracing::{info, warn};

/// Outcome shown to the person who filled in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success {
        ticket_id: String,
        message: Option<String>,
    },
    Failure {
        message: String,
    },
}

impl Notice {
    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success { .. })
    }

    /// Text for an alert box.
    pub fn text(&self) -> String {
        match self {
            Notice::Success { ticket_id, .. } => {
                format!("Ticket submitted successfully! Ticket ID: {}", ticket_id)
            }
            Notice::Failure { message } => format!("Failed to submit ticket: {}", message),
        }
    }
}

/// Delivers notices to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Writes notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Success { ticket_id, .. } => {
                info!(ticket_id = %ticket_id, "{}", notice.text())
            }
            Notice::Failure { .. } => warn!("{}", notice.text()),
        }
    }
}
