//! Strategies for pairing approval records with canonical departments.

use serde::{Deserialize, Serialize};

use crate::department::Department;

use super::types::ApprovalRecord;

/// Decides whether an approval record belongs to a department.
pub trait DepartmentMatcher: Send + Sync {
    /// Name of this matcher for logging and metrics.
    fn name(&self) -> &str;

    fn matches(&self, department: &Department, record: &ApprovalRecord) -> bool;
}

/// Matches on the explicit department code supplied by the upstream.
///
/// Records without a code never match.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeMatcher;

impl DepartmentMatcher for CodeMatcher {
    fn name(&self) -> &str {
        "code"
    }

    fn matches(&self, department: &Department, record: &ApprovalRecord) -> bool {
        record
            .department
            .code
            .as_deref()
            .is_some_and(|code| code.trim().eq_ignore_ascii_case(department.id))
    }
}

/// Legacy free-text matching.
///
/// A record matches when its lower-cased name contains the department id, or
/// when the department's lower-cased display name contains the record name.
/// Overlapping names are ambiguous: "Training and Placement" matches both
/// `placement` and `training`. Names are compared as given; a name that is
/// empty or only whitespace never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl DepartmentMatcher for SubstringMatcher {
    fn name(&self) -> &str {
        "substring"
    }

    fn matches(&self, department: &Department, record: &ApprovalRecord) -> bool {
        let record_name = record.department.dept_name.to_lowercase();
        if record_name.trim().is_empty() {
            return false;
        }

        record_name.contains(department.id)
            || department.name.to_lowercase().contains(&record_name)
    }
}

/// Uses the explicit code when a record carries one, otherwise falls back
/// to free-text matching on the department name.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoMatcher;

impl DepartmentMatcher for AutoMatcher {
    fn name(&self) -> &str {
        "auto"
    }

    fn matches(&self, department: &Department, record: &ApprovalRecord) -> bool {
        if record.department.code.is_some() {
            CodeMatcher.matches(department, record)
        } else {
            SubstringMatcher.matches(department, record)
        }
    }
}

/// Configured matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    #[default]
    Auto,
    Code,
    Substring,
}

impl MatchStrategy {
    pub fn matcher(self) -> Box<dyn DepartmentMatcher> {
        match self {
            MatchStrategy::Auto => Box::new(AutoMatcher),
            MatchStrategy::Code => Box::new(CodeMatcher),
            MatchStrategy::Substring => Box::new(SubstringMatcher),
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStrategy::Auto => write!(f, "auto"),
            MatchStrategy::Code => write!(f, "code"),
            MatchStrategy::Substring => write!(f, "substring"),
        }
    }
}
