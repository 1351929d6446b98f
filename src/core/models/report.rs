//! Quality report model
//!
//! A report is the ordered list of every detector's result for one text.
//! The issue count and verdict are derived once at construction.

use serde::Serialize;

use super::CheckResult;

/// One named entry in a [`QualityReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckEntry {
    /// Display name of the check (e.g. "Language Mixing")
    pub check_name: String,
    /// What the detector reported
    pub result: CheckResult,
}

/// Aggregated outcome of all checks for one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityReport {
    checks: Vec<CheckEntry>,
    issues_found: usize,
    passed: bool,
}

impl QualityReport {
    /// Build a report from entries in invocation order
    #[must_use]
    pub fn new(checks: Vec<CheckEntry>) -> Self {
        let issues_found = checks.iter().filter(|c| c.result.has_issue()).count();
        Self {
            checks,
            issues_found,
            passed: issues_found == 0,
        }
    }

    /// Entries in the order the checks ran
    #[must_use]
    pub fn checks(&self) -> &[CheckEntry] {
        &self.checks
    }

    /// Number of entries whose issue is not the sentinel
    #[must_use]
    pub const fn issues_found(&self) -> usize {
        self.issues_found
    }

    /// True iff every check passed
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.passed
    }

    /// Look up a result by check name
    #[must_use]
    pub fn get(&self, check_name: &str) -> Option<&CheckResult> {
        self.checks
            .iter()
            .find(|c| c.check_name == check_name)
            .map(|c| &c.result)
    }
}
