//! Output formatting for human and JSON modes
//!
//! A quality report can be rendered either as the console report or as
//! pretty-printed JSON.

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::QualityReport;

/// Width of the report frame
const RULE_WIDTH: usize = 60;

/// Characters of input shown in the report header
const PREVIEW_CHARS: usize = 80;

/// Column width for check names
const NAME_WIDTH: usize = 25;

const OK_LABEL: &str = "✅ OK";
const ISSUE_LABEL: &str = "⚠️  ISSUE";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A report paired with the text it describes, ready to render
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportOutput<'a> {
    /// The checked text
    #[serde(skip)]
    pub text: &'a str,
    /// The report to render
    #[serde(flatten)]
    pub report: &'a QualityReport,
}

impl<'a> ReportOutput<'a> {
    /// Pair a report with its input text
    #[must_use]
    pub const fn new(text: &'a str, report: &'a QualityReport) -> Self {
        Self { text, report }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.format_human(true)),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Plain-text console report without colour
    #[must_use]
    pub fn to_human_string(&self) -> String {
        self.format_human(false)
    }

    /// Pretty JSON form of the report
    #[must_use]
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    fn format_human(&self, color: bool) -> String {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "{heavy}");
        let _ = writeln!(out, "Arabic Text Quality Report");
        let _ = writeln!(out, "{heavy}");
        let _ = writeln!(out, "Input text: {}", preview(self.text));
        let _ = writeln!(out, "{light}");

        for entry in self.report.checks() {
            let status = match (entry.result.has_issue(), color) {
                (false, false) => OK_LABEL.to_string(),
                (true, false) => ISSUE_LABEL.to_string(),
                (false, true) => OK_LABEL.green().to_string(),
                (true, true) => ISSUE_LABEL.yellow().bold().to_string(),
            };
            let _ = writeln!(
                out,
                "{:<NAME_WIDTH$} | {status} | {}",
                entry.check_name, entry.result.message
            );
        }

        let _ = writeln!(out, "{light}");
        if self.report.passed() {
            let _ = writeln!(out, "Overall: Text passed all quality checks.");
        } else {
            let _ = writeln!(
                out,
                "Overall: {} issue(s) detected. Review before using in AI training.",
                self.report.issues_found()
            );
        }
        let _ = writeln!(out, "{heavy}");
        out
    }

    fn render_json(&self) {
        println!("{}", self.to_json_string());
    }
}

/// First [`PREVIEW_CHARS`] characters of `text`, with `...` if truncated
#[must_use]
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
