//! Timeline data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::department::Department;

/// Decision a department has recorded for a request.
///
/// Anything the upstream sends that is not a known status is treated as
/// pending, as is a missing or null status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Approved,
    Rejected,
    RequestedInfo,
    #[default]
    #[serde(other)]
    Pending,
}

/// Colour family the UI uses for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl ApprovalStatus {
    /// Display order on the timeline; lower sorts first.
    pub fn priority(&self) -> u8 {
        match self {
            ApprovalStatus::Approved => 0,
            ApprovalStatus::RequestedInfo => 1,
            ApprovalStatus::Rejected => 2,
            ApprovalStatus::Pending => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
            ApprovalStatus::RequestedInfo => "Information Requested",
            ApprovalStatus::Pending => "Pending",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            ApprovalStatus::Approved => StatusTone::Success,
            ApprovalStatus::RequestedInfo => StatusTone::Warning,
            ApprovalStatus::Rejected => StatusTone::Danger,
            ApprovalStatus::Pending => StatusTone::Neutral,
        }
    }

    /// Wire form, e.g. `REQUESTED_INFO`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Approved => "APPROVED",
            ApprovalStatus::Rejected => "REJECTED",
            ApprovalStatus::RequestedInfo => "REQUESTED_INFO",
            ApprovalStatus::Pending => "PENDING",
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Department reference carried by an approval record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRef {
    /// Free-text department name as the upstream system spells it.
    pub dept_name: String,
    /// Explicit canonical department id, when the upstream supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// One department's decision on a student request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRecord {
    pub department: DepartmentRef,
    #[serde(default)]
    pub status: Option<ApprovalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ApprovalRecord {
    /// Create a record identified only by its free-text department name.
    pub fn named(dept_name: impl Into<String>, status: ApprovalStatus) -> Self {
        Self {
            department: DepartmentRef {
                dept_name: dept_name.into(),
                code: None,
            },
            status: Some(status),
            remarks: None,
            updated_at: None,
        }
    }

    /// Create a record carrying an explicit department code.
    pub fn coded(
        code: impl Into<String>,
        dept_name: impl Into<String>,
        status: ApprovalStatus,
    ) -> Self {
        let mut record = Self::named(dept_name, status);
        record.department.code = Some(code.into());
        record
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Resolved status; missing means pending.
    pub fn resolved_status(&self) -> ApprovalStatus {
        self.status.unwrap_or_default()
    }
}

/// A canonical department paired with its resolved status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentStatus {
    pub department: Department,
    pub status: ApprovalStatus,
    /// The approval record the status came from, if one matched.
    pub record: Option<ApprovalRecord>,
}

impl DepartmentStatus {
    pub fn pending(department: Department) -> Self {
        Self {
            department,
            status: ApprovalStatus::Pending,
            record: None,
        }
    }

    pub fn from_record(department: Department, record: &ApprovalRecord) -> Self {
        Self {
            department,
            status: record.resolved_status(),
            record: Some(record.clone()),
        }
    }
}

/// Approved departments out of the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub approved: usize,
    pub total: usize,
}

impl Progress {
    /// Percentage of departments that approved, 0 when there are none.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.approved as f64 * 100.0 / self.total as f64
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.approved == self.total
    }
}

/// Number of departments in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub approved: usize,
    pub requested_info: usize,
    pub rejected: usize,
    pub pending: usize,
}

impl StatusCounts {
    pub fn tally<'a>(statuses: impl IntoIterator<Item = &'a DepartmentStatus>) -> Self {
        let mut counts = Self::default();
        for entry in statuses {
            match entry.status {
                ApprovalStatus::Approved => counts.approved += 1,
                ApprovalStatus::RequestedInfo => counts.requested_info += 1,
                ApprovalStatus::Rejected => counts.rejected += 1,
                ApprovalStatus::Pending => counts.pending += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.approved + self.requested_info + self.rejected + self.pending
    }
}
