//! Report aggregator
//!
//! Runs every detector once, in the order of [`CHECKS`], over the same text
//! and collects their results into a [`QualityReport`].

use crate::core::models::{CheckEntry, CheckOptions, CheckResult, QualityReport};

use super::{
    check_language_mixing, check_repeated_words, check_special_characters, check_text_length_with,
};

/// A detector adapted to the aggregator's uniform signature
pub type Detector = fn(&str, &CheckOptions) -> CheckResult;

/// A named entry in the check table
#[derive(Debug, Clone, Copy)]
pub struct CheckSpec {
    /// Display name used in reports
    pub name: &'static str,
    /// The detector to run
    pub run: Detector,
}

/// Checks in invocation order
pub static CHECKS: &[CheckSpec] = &[
    CheckSpec {
        name: "Language Mixing",
        run: |text, _| check_language_mixing(text),
    },
    CheckSpec {
        name: "Repeated Words",
        run: |text, _| check_repeated_words(text),
    },
    CheckSpec {
        name: "Text Length",
        run: |text, options| check_text_length_with(text, &options.length),
    },
    CheckSpec {
        name: "Special Characters",
        run: |text, _| check_special_characters(text),
    },
];

/// Run all checks with default options
#[must_use]
pub fn run_quality_check(text: &str) -> QualityReport {
    run_quality_check_with(text, &CheckOptions::default())
}

/// Run all checks with the given options
#[must_use]
pub fn run_quality_check_with(text: &str, options: &CheckOptions) -> QualityReport {
    let checks = CHECKS
        .iter()
        .map(|check| CheckEntry {
            check_name: check.name.to_string(),
            result: (check.run)(text, options),
        })
        .collect();

    let report = QualityReport::new(checks);
    log::debug!("quality check: {} issue(s) found", report.issues_found());
    report
}
