//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Approval timelines (builds, progress distribution)
//! - Ticket submissions (results, latency of the remote service)

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts};

// =============================================================================
// Timeline Metrics
// =============================================================================

/// Timelines built, by matcher.
pub static TIMELINES_BUILT: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "campusdesk_timelines_built_total",
            "Total approval timelines built",
        ),
        &["matcher"], // "auto", "code", "substring"
    )
    .unwrap()
});

/// Approval progress percentage of built timelines.
pub static TIMELINE_PROGRESS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "campusdesk_timeline_progress_percent",
            "Distribution of approval progress across built timelines",
        )
        .buckets(vec![0.0, 10.0, 25.0, 50.0, 75.0, 90.0, 100.0]),
    )
    .unwrap()
});

// =============================================================================
// Ticket Metrics
// =============================================================================

/// Ticket submission attempts by result.
pub static TICKET_SUBMISSIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "campusdesk_ticket_submissions_total",
            "Total ticket submission attempts",
        ),
        &["result"], // "success", "rejected", "network", "invalid", ...
    )
    .unwrap()
});

/// Time spent waiting on the ticket service.
pub static TICKET_SUBMIT_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "campusdesk_ticket_submit_duration_seconds",
            "Duration of ticket submission requests",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
    )
    .unwrap()
});

/// All core metrics, for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(TIMELINES_BUILT.clone()),
        Box::new(TIMELINE_PROGRESS.clone()),
        Box::new(TICKET_SUBMISSIONS.clone()),
        Box::new(TICKET_SUBMIT_DURATION.clone()),
    ]
}
