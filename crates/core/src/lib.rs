pub mod config;
pub mod department;
pub mod metrics;
pub mod testing;
pub mod ticket;
pub mod timeline;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ServerConfig,
    TicketEndpointConfig, TimelineConfig,
};
pub use department::{Department, CANONICAL_DEPARTMENTS};
pub use ticket::{
    HttpTicketSubmitter, LogNotifier, Notice, Notifier, RequiredField, SubmitError, SubmitReceipt,
    SubmitResponse, TicketCategory, TicketFields, TicketForm, TicketPayload, TicketPriority,
    TicketStatus, TicketSubmitter, ValidationError,
};
pub use timeline::{
    resolve_statuses, sort_by_status, unmatched_records, ApprovalRecord, ApprovalStatus,
    AutoMatcher, CodeMatcher, DepartmentMatcher, DepartmentRef, DepartmentStatus, MatchStrategy,
    Progress, StatusCounts, StatusTone, SubstringMatcher, Timeline,
};
