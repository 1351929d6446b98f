//! Tests for the Output module
//!
//! Reports render either as the plain console report or as JSON.

use arabic_quality::core::services::run_quality_check;
use arabic_quality::output::{OutputMode, ReportOutput, preview};

use crate::common::{CLEAN_TEXT, MIXED_TEXT, SHORT_TEXT};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Human Rendering Tests
// =============================================================================

#[test]
fn human_report_passing() {
    let report = run_quality_check(CLEAN_TEXT);
    let text = ReportOutput::new(CLEAN_TEXT, &report).to_human_string();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "=".repeat(60));
    assert_eq!(lines[1], "Arabic Text Quality Report");
    assert_eq!(lines[3], format!("Input text: {}", preview(CLEAN_TEXT)));
    assert_eq!(
        lines[5],
        "Language Mixing           | ✅ OK | Language consistency looks good."
    );
    assert!(text.contains("Overall: Text passed all quality checks."));
    assert_eq!(lines.last().copied(), Some("=".repeat(60).as_str()));
}

#[test]
fn human_report_with_issues() {
    let report = run_quality_check(SHORT_TEXT);
    let text = ReportOutput::new(SHORT_TEXT, &report).to_human_string();

    assert!(text.contains("Input text: مرحبا\n"));
    assert!(text.contains(
        "Text Length               | ⚠️  ISSUE | Text is too short (1 words). Minimum is 5."
    ));
    assert!(text.contains("Overall: 1 issue(s) detected. Review before using in AI training."));
}

#[test]
fn human_report_truncates_long_input() {
    let long = format!("{CLEAN_TEXT} {CLEAN_TEXT}");
    let report = run_quality_check(&long);
    let text = ReportOutput::new(&long, &report).to_human_string();
    let header = text.lines().nth(3).unwrap();
    assert!(header.ends_with("..."));
    assert_eq!(header.chars().count(), "Input text: ".len() + 80 + 3);
}

#[test]
fn human_report_has_one_line_per_check() {
    let report = run_quality_check(MIXED_TEXT);
    let text = ReportOutput::new(MIXED_TEXT, &report).to_human_string();
    assert_eq!(text.lines().filter(|l| l.contains(" | ")).count(), 4);
}

// =============================================================================
// JSON Rendering Tests
// =============================================================================

#[test]
fn json_report_shape() {
    let report = run_quality_check(MIXED_TEXT);
    let json = ReportOutput::new(MIXED_TEXT, &report).to_json_string();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["issues_found"], 2);
    assert_eq!(value["passed"], false);
    assert!(value.get("text").is_none());

    let checks = value["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 4);
    assert_eq!(checks[0]["check_name"], "Language Mixing");
    assert_eq!(checks[0]["result"]["issue"], "high_mixing");
    assert_eq!(checks[1]["result"]["issue"], "repeated_words");
    assert_eq!(checks[2]["result"]["issue"], "none");
    assert_eq!(checks[3]["check_name"], "Special Characters");
}

#[test]
fn json_check_result_fields() {
    let report = run_quality_check("");
    let value = serde_json::to_value(&report).unwrap();
    let first = &value["checks"][0]["result"];
    assert_eq!(first["issue"], "no_arabic");
    assert_eq!(first["message"], "No Arabic characters found in the text.");
}
