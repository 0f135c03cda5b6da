//! Reconciliation of approval records against the canonical departments.

use tracing::{debug, warn};

use crate::department::CANONICAL_DEPARTMENTS;
use crate::metrics::{TIMELINES_BUILT, TIMELINE_PROGRESS};

use super::matcher::DepartmentMatcher;
use super::types::{ApprovalRecord, DepartmentStatus, Progress, StatusCounts};

/// Resolve one status per canonical department, in canonical order.
///
/// Each department takes the first record the matcher accepts. Departments
/// without a match are pending. The result always holds exactly one entry
/// per canonical department.
pub fn resolve_statuses(
    records: &[ApprovalRecord],
    matcher: &dyn DepartmentMatcher,
) -> Vec<DepartmentStatus> {
    CANONICAL_DEPARTMENTS
        .iter()
        .map(|department| {
            match records.iter().find(|r| matcher.matches(department, r)) {
                Some(record) => DepartmentStatus::from_record(*department, record),
                None => DepartmentStatus::pending(*department),
            }
        })
        .collect()
}

/// Records the matcher pairs with no canonical department.
pub fn unmatched_records<'a>(
    records: &'a [ApprovalRecord],
    matcher: &dyn DepartmentMatcher,
) -> Vec<&'a ApprovalRecord> {
    records
        .iter()
        .filter(|r| {
            !CANONICAL_DEPARTMENTS
                .iter()
                .any(|department| matcher.matches(department, r))
        })
        .collect()
}

/// Order entries by status priority. Stable, so ties keep canonical order.
pub fn sort_by_status(statuses: &mut [DepartmentStatus]) {
    statuses.sort_by_key(|entry| entry.status.priority());
}

/// A reconciled, display-ordered approval timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    entries: Vec<DepartmentStatus>,
    progress: Progress,
    counts: StatusCounts,
}

impl Timeline {
    pub fn build(records: &[ApprovalRecord], matcher: &dyn DepartmentMatcher) -> Self {
        let mut entries = resolve_statuses(records, matcher);

        for record in unmatched_records(records, matcher) {
            warn!(
                matcher = matcher.name(),
                dept_name = %record.department.dept_name,
                code = record.department.code.as_deref().unwrap_or(""),
                "Approval record matched no department"
            );
        }

        // Counts are taken before sorting; they do not depend on order.
        let counts = StatusCounts::tally(&entries);
        let progress = Progress {
            approved: counts.approved,
            total: entries.len(),
        };

        sort_by_status(&mut entries);

        debug!(
            matcher = matcher.name(),
            records = records.len(),
            approved = progress.approved,
            total = progress.total,
            "Built approval timeline"
        );
        TIMELINES_BUILT.with_label_values(&[matcher.name()]).inc();
        TIMELINE_PROGRESS.observe(progress.percent());

        Self {
            entries,
            progress,
            counts,
        }
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[DepartmentStatus] {
        &self.entries
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn counts(&self) -> StatusCounts {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{ApprovalStatus, AutoMatcher, CodeMatcher, SubstringMatcher};

    #[test]
    fn test_unmatched_records() {
        let records = vec![
            ApprovalRecord::named("Library", ApprovalStatus::Approved),
            ApprovalRecord::named("Canteen", ApprovalStatus::Approved),
            ApprovalRecord::coded("LIBRARY", "Library", ApprovalStatus::Approved),
        ];
        let unmatched = unmatched_records(&records, &AutoMatcher);
        assert_eq!(unmatched.len(), 1);
        assert_eq!(unmatched[0].department.dept_name, "Canteen");

        // Name-only records are all unmatched under strict codes.
        assert_eq!(unmatched_records(&records, &CodeMatcher).len(), 2);
    }

    #[test]
    fn test_build_auto_counts_name_only_records() {
        let records = vec![
            ApprovalRecord::named("Library", ApprovalStatus::Approved),
            ApprovalRecord::named("Hostel Office", ApprovalStatus::Approved),
            ApprovalRecord::named("Accounts", ApprovalStatus::Approved),
        ];
        let timeline = Timeline::build(&records, &AutoMatcher);
        assert_eq!(timeline.progress().approved, 3);
        assert_eq!(timeline.progress().percent(), 30.0);
    }

    #[test]
    fn test_resolve_empty_records_all_pending() {
        let statuses = resolve_statuses(&[], &SubstringMatcher);
        assert_eq!(statuses.len(), 10);
        assert!(statuses
            .iter()
            .all(|s| s.status == ApprovalStatus::Pending && s.record.is_none()));
    }

    #[test]
    fn test_resolve_keeps_canonical_order() {
        let records = vec![
            ApprovalRecord::named("Transport", ApprovalStatus::Approved),
            ApprovalRecord::named("Library", ApprovalStatus::Rejected),
        ];
        let statuses = resolve_statuses(&records, &SubstringMatcher);
        let ids: Vec<_> = statuses.iter().map(|s| s.department.id).collect();
        let canonical: Vec<_> = CANONICAL_DEPARTMENTS.iter().map(|d| d.id).collect();
        assert_eq!(ids, canonical);
        assert_eq!(statuses[0].status, ApprovalStatus::Rejected);
        assert_eq!(statuses[8].status, ApprovalStatus::Approved);
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let records = vec![
            ApprovalRecord::named("Library", ApprovalStatus::RequestedInfo),
            ApprovalRecord::named("Library", ApprovalStatus::Approved),
        ];
        let statuses = resolve_statuses(&records, &SubstringMatcher);
        assert_eq!(statuses[0].status, ApprovalStatus::RequestedInfo);
    }

    #[test]
    fn test_resolve_record_reference_is_kept() {
        let records =
            vec![ApprovalRecord::coded("hostel", "Hostel", ApprovalStatus::Rejected)
                .with_remarks("Dues outstanding")];
        let statuses = resolve_statuses(&records, &CodeMatcher);
        let hostel = &statuses[1];
        assert_eq!(hostel.department.id, "hostel");
        assert_eq!(
            hostel.record.as_ref().and_then(|r| r.remarks.as_deref()),
            Some("Dues outstanding")
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let mut statuses = resolve_statuses(&[], &CodeMatcher);
        statuses[4].status = ApprovalStatus::Approved;
        statuses[2].status = ApprovalStatus::Approved;
        sort_by_status(&mut statuses);
        assert_eq!(statuses[0].department.id, "accounts");
        assert_eq!(statuses[1].department.id, "laboratory");
        assert_eq!(statuses[2].department.id, "library");
    }

    #[test]
    fn test_build_progress_uses_approved_count() {
        let records = vec![
            ApprovalRecord::coded("library", "Library", ApprovalStatus::Approved),
            ApprovalRecord::coded("sports", "Sports", ApprovalStatus::Approved),
            ApprovalRecord::coded("hod", "HOD", ApprovalStatus::Rejected),
        ];
        let timeline = Timeline::build(&records, &CodeMatcher);
        assert_eq!(timeline.progress().approved, 2);
        assert_eq!(timeline.progress().total, 10);
        assert!((timeline.progress().percent() - 20.0).abs() < 1e-9);
        assert_eq!(timeline.counts().rejected, 1);
        assert_eq!(timeline.counts().pending, 7);
        assert_eq!(timeline.entries()[0].department.id, "library");
        assert_eq!(timeline.entries()[1].department.id, "sports");
        assert_eq!(timeline.entries()[2].department.id, "hod");
    }
}
