//! Approval timeline: pairs approval records with the canonical departments,
//! orders them by status and reports overall progress.

mod matcher;
mod reconcile;
mod render;
mod types;

pub use matcher::{AutoMatcher, CodeMatcher, DepartmentMatcher, MatchStrategy, SubstringMatcher};
pub use reconcile::{resolve_statuses, sort_by_status, unmatched_records, Timeline};
pub use types::{
    ApprovalRecord, ApprovalStatus, DepartmentRef, DepartmentStatus, Progress, StatusCounts,
    StatusTone,
};
