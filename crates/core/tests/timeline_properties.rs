//! Behavioural properties of the approval timeline.

use campusdesk_core::testing::fixtures::{coded_record, uniform_records};
use campusdesk_core::{
    resolve_statuses, sort_by_status, ApprovalRecord, ApprovalStatus, CodeMatcher,
    DepartmentMatcher, MatchStrategy, SubstringMatcher, Timeline, CANONICAL_DEPARTMENTS,
};

fn canonical_ids() -> Vec<&'static str> {
    CANONICAL_DEPARTMENTS.iter().map(|d| d.id).collect()
}

fn sorted_ids(timeline: &Timeline) -> Vec<&'static str> {
    let mut ids: Vec<_> = timeline.entries().iter().map(|e| e.department.id).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn test_every_department_appears_exactly_once() {
    let mut expected = canonical_ids();
    expected.sort_unstable();

    let inputs: Vec<Vec<ApprovalRecord>> = vec![
        vec![],
        vec![ApprovalRecord::named("Library", ApprovalStatus::Approved)],
        uniform_records(ApprovalStatus::Approved),
        // Duplicates and records for unknown departments.
        vec![
            ApprovalRecord::named("Library", ApprovalStatus::Approved),
            ApprovalRecord::named("library", ApprovalStatus::Rejected),
            ApprovalRecord::named("Cafeteria", ApprovalStatus::Approved),
            ApprovalRecord::coded("gym", "Gym", ApprovalStatus::Approved),
        ],
        // Ambiguous name hitting two departments.
        vec![ApprovalRecord::named(
            "Training and Placement",
            ApprovalStatus::Approved,
        )],
    ];

    for strategy in [MatchStrategy::Auto, MatchStrategy::Code, MatchStrategy::Substring] {
        let matcher = strategy.matcher();
        for records in &inputs {
            let timeline = Timeline::build(records, matcher.as_ref());
            assert_eq!(timeline.entries().len(), 10);
            assert_eq!(sorted_ids(&timeline), expected);
        }
    }
}

#[test]
fn test_unmatched_departments_are_pending() {
    let records = vec![coded_record("hostel", ApprovalStatus::Approved)];
    let statuses = resolve_statuses(&records, &CodeMatcher);

    for entry in &statuses {
        if entry.department.id == "hostel" {
            assert_eq!(entry.status, ApprovalStatus::Approved);
        } else {
            assert_eq!(entry.status, ApprovalStatus::Pending);
            assert!(entry.record.is_none());
        }
    }
}

#[test]
fn test_sort_order_with_one_of_each_status() {
    let records = vec![
        coded_record("examination", ApprovalStatus::Rejected),
        coded_record("transport", ApprovalStatus::RequestedInfo),
        coded_record("sports", ApprovalStatus::Approved),
    ];
    let mut statuses = resolve_statuses(&records, &CodeMatcher);
    sort_by_status(&mut statuses);

    let order: Vec<_> = statuses
        .iter()
        .map(|s| (s.department.id, s.status))
        .collect();

    assert_eq!(order[0], ("sports", ApprovalStatus::Approved));
    assert_eq!(order[1], ("transport", ApprovalStatus::RequestedInfo));
    assert_eq!(order[2], ("examination", ApprovalStatus::Rejected));

    let pending: Vec<_> = order[3..].iter().map(|(id, _)| *id).collect();
    assert_eq!(
        pending,
        vec![
            "library",
            "hostel",
            "accounts",
            "laboratory",
            "placement",
            "training",
            "hod"
        ]
    );
    assert!(order[3..]
        .iter()
        .all(|(_, status)| *status == ApprovalStatus::Pending));
}

#[test]
fn test_three_of_ten_approved_is_thirty_percent() {
    let records = vec![
        coded_record("library", ApprovalStatus::Approved),
        coded_record("accounts", ApprovalStatus::Approved),
        coded_record("hod", ApprovalStatus::Approved),
        coded_record("hostel", ApprovalStatus::Rejected),
    ];
    let timeline = Timeline::build(&records, &CodeMatcher);
    assert_eq!(timeline.progress().approved, 3);
    assert_eq!(timeline.progress().total, 10);
    assert_eq!(timeline.progress().percent(), 30.0);
}

#[test]
fn test_all_approved_is_complete() {
    let timeline = Timeline::build(&uniform_records(ApprovalStatus::Approved), &CodeMatcher);
    assert!(timeline.progress().is_complete());
    assert_eq!(timeline.progress().percent(), 100.0);
    assert_eq!(timeline.counts().approved, 10);
}

#[test]
fn test_record_order_does_not_change_progress() {
    let mut records = vec![
        coded_record("library", ApprovalStatus::Approved),
        coded_record("hostel", ApprovalStatus::Rejected),
        coded_record("sports", ApprovalStatus::Approved),
    ];
    let forward = Timeline::build(&records, &CodeMatcher);
    records.reverse();
    let backward = Timeline::build(&records, &CodeMatcher);

    assert_eq!(forward.progress(), backward.progress());
    assert_eq!(forward.counts(), backward.counts());
}

#[test]
fn test_substring_matching_overlap_versus_codes() {
    let ambiguous = vec![ApprovalRecord::named(
        "Training and Placement",
        ApprovalStatus::Approved,
    )];
    let fuzzy = Timeline::build(&ambiguous, &SubstringMatcher);
    // The one record is claimed by both placement departments.
    assert_eq!(fuzzy.progress().approved, 2);

    let coded = vec![ApprovalRecord::coded(
        "training",
        "Training and Placement",
        ApprovalStatus::Approved,
    )];
    let exact = Timeline::build(&coded, &CodeMatcher);
    assert_eq!(exact.progress().approved, 1);
    assert_eq!(exact.entries()[0].department.id, "training");
}

#[test]
fn test_matcher_names() {
    assert_eq!(CodeMatcher.name(), "code");
    assert_eq!(SubstringMatcher.name(), "substring");
}
