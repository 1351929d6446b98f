//! Character-set validator
//!
//! Allowed: the Arabic block (U+0600..=U+06FF, which already covers the
//! Arabic comma, semicolon, question mark and tatweel), printable ASCII
//! (U+0020..=U+007E), plus newline and tab.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{CheckResult, Issue};

static UNUSUAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\x{0600}-\x{06FF}\x{0020}-\x{007E}\x{060C}\x{061B}\x{061F}\x{0640}]")
        .expect("valid regex")
});

/// Characters always tolerated even when outside the allow-list ranges
const TOLERATED: [char; 3] = ['\n', '\t', ' '];

/// Distinct characters outside the allow-list, in first-seen order
#[must_use]
pub fn find_unusual_chars(text: &str) -> Vec<char> {
    let mut found: Vec<char> = Vec::new();
    for c in UNUSUAL_RE.find_iter(text).flat_map(|m| m.as_str().chars()) {
        if !TOLERATED.contains(&c) && !found.contains(&c) {
            found.push(c);
        }
    }
    found
}

/// Flag characters that should not appear in clean Arabic text
#[must_use]
pub fn check_special_characters(text: &str) -> CheckResult {
    let unusual = find_unusual_chars(text);
    log::debug!("special characters: {} distinct unusual", unusual.len());

    if unusual.is_empty() {
        return CheckResult::ok("No unusual special characters found.");
    }

    let listed: Vec<String> = unusual.iter().map(char::to_string).collect();
    CheckResult::new(
        Issue::UnusualChars,
        format!("Unusual characters found: [{}]", listed.join(", ")),
    )
}
