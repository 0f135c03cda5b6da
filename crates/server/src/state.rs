use std::sync::Arc;

use campusdesk_core::{Config, DepartmentMatcher, Notifier, TicketSubmitter};

/// Shared application state
pub struct AppState {
    config: Config,
    matcher: Box<dyn DepartmentMatcher>,
    submitter: Arc<dyn TicketSubmitter>,
    notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(
        config: Config,
        submitter: Arc<dyn TicketSubmitter>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let matcher = config.timeline.matching.matcher();
        Self {
            config,
            matcher,
            submitter,
            notifier,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn matcher(&self) -> &dyn DepartmentMatcher {
        self.matcher.as_ref()
    }

    pub fn submitter(&self) -> &dyn TicketSubmitter {
        self.submitter.as_ref()
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }
}
