//! Notifier that keeps every notice for later inspection.

use std::sync::Mutex;

use crate::ticket::{Notice, Notifier};

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice.clone());
        }
    }
}
