//! Check result model
//!
//! The outcome of running a single detector over a text.

use serde::{Deserialize, Serialize};

use super::Issue;

/// Outcome of one detector: an issue tag plus a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Issue tag (`Issue::None` when the check passed)
    pub issue: Issue,

    /// Description of what was found, may embed counts or offending text
    pub message: String,
}

impl CheckResult {
    /// Create a result with the given tag
    #[must_use]
    pub fn new(issue: Issue, message: impl Into<String>) -> Self {
        Self {
            issue,
            message: message.into(),
        }
    }

    /// Create a passing result
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Issue::None, message)
    }

    /// Whether this result reports a problem
    #[must_use]
    pub const fn has_issue(&self) -> bool {
        !self.issue.is_none()
    }
}
