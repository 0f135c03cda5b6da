//! Approval timeline API handlers.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use campusdesk_core::{
    ApprovalRecord, ApprovalStatus, Department, DepartmentStatus, StatusCounts, StatusTone,
    Timeline,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for building a timeline
#[derive(Debug, Deserialize)]
pub struct TimelineRequest {
    /// Approval records for one student request, in any order
    pub approvals: Vec<ApprovalRecord>,
}

/// Query parameters for building a timeline
#[derive(Debug, Default, Deserialize)]
pub struct TimelineParams {
    /// `json` (default) or `text`
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub approved: usize,
    pub total: usize,
    pub percent: f64,
}

/// One row of the rendered timeline
#[derive(Debug, Serialize)]
pub struct TimelineEntryResponse {
    pub department: Department,
    pub status: ApprovalStatus,
    pub label: &'static str,
    pub tone: StatusTone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<ApprovalRecord>,
}

impl From<&DepartmentStatus> for TimelineEntryResponse {
    fn from(entry: &DepartmentStatus) -> Self {
        Self {
            department: entry.department,
            status: entry.status,
            label: entry.status.label(),
            tone: entry.status.tone(),
            record: entry.record.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub matcher: String,
    pub progress: ProgressResponse,
    pub counts: StatusCounts,
    pub entries: Vec<TimelineEntryResponse>,
}

impl TimelineResponse {
    fn new(timeline: &Timeline, matcher: &str) -> Self {
        let progress = timeline.progress();
        Self {
            matcher: matcher.to_string(),
            progress: ProgressResponse {
                approved: progress.approved,
                total: progress.total,
                percent: progress.percent(),
            },
            counts: timeline.counts(),
            entries: timeline
                .entries()
                .iter()
                .map(TimelineEntryResponse::from)
                .collect(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Reconcile approval records into a display-ordered timeline
pub async fn build_timeline(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TimelineParams>,
    Json(body): Json<TimelineRequest>,
) -> Response {
    let matcher = state.matcher();
    let timeline = Timeline::build(&body.approvals, matcher);

    match params.format.as_deref() {
        Some("text") => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            timeline.to_string(),
        )
            .into_response(),
        _ => Json(TimelineResponse::new(&timeline, matcher.name())).into_response(),
    }
}
