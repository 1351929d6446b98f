//! Language-mixing detector
//!
//! Measures how much Latin script is mixed into Arabic text. The ratio is
//! taken over Arabic-block plus Latin-letter characters only; digits,
//! punctuation and other scripts do not enter the denominator.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{CheckResult, Issue};

/// Ratio above which mixing is reported as high
pub const HIGH_MIXING_THRESHOLD: f64 = 0.20;

/// Ratio above which mixing is reported as moderate
pub const MODERATE_MIXING_THRESHOLD: f64 = 0.05;

static ARABIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{0600}-\x{06FF}]").expect("valid regex"));

static LATIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("[a-zA-Z]").expect("valid regex"));

/// Arabic-block and Latin-letter character counts for a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptCounts {
    /// Code points in U+0600..=U+06FF
    pub arabic: usize,
    /// ASCII letters A-Z and a-z
    pub latin: usize,
}

impl ScriptCounts {
    /// Count both scripts in `text`
    #[must_use]
    pub fn of(text: &str) -> Self {
        Self {
            arabic: ARABIC_RE.find_iter(text).count(),
            latin: LATIN_RE.find_iter(text).count(),
        }
    }

    /// Share of Latin letters among Arabic + Latin characters
    ///
    /// Returns `None` when the text has no Arabic characters.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mixing_ratio(self) -> Option<f64> {
        if self.arabic == 0 {
            return None;
        }
        Some(self.latin as f64 / (self.latin + self.arabic) as f64)
    }
}

/// Classify the script composition of `text`
#[must_use]
pub fn check_language_mixing(text: &str) -> CheckResult {
    let counts = ScriptCounts::of(text);
    log::debug!(
        "language mixing: arabic={} latin={}",
        counts.arabic,
        counts.latin
    );

    let Some(ratio) = counts.mixing_ratio() else {
        return CheckResult::new(Issue::NoArabic, "No Arabic characters found in the text.");
    };

    let percent = (ratio * 100.0).round_ties_even();
    if ratio > HIGH_MIXING_THRESHOLD {
        CheckResult::new(
            Issue::HighMixing,
            format!("High language mixing detected. {percent:.0}% non-Arabic characters."),
        )
    } else if ratio > MODERATE_MIXING_THRESHOLD {
        CheckResult::new(
            Issue::ModerateMixing,
            format!("Some language mixing detected ({percent:.0}% non-Arabic)."),
        )
    } else {
        CheckResult::ok("Language consistency looks good.")
    }
}
