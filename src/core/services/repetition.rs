//! Repetition detector
//!
//! Flags tokens that exactly repeat the token right before them. Comparison
//! is plain string equality, so case or diacritic variants never match.

use super::tokens::tokens;
use crate::core::models::{CheckResult, Issue};

/// Distinct tokens that immediately repeat their predecessor, in first-seen order
#[must_use]
pub fn find_repeated_words(text: &str) -> Vec<&str> {
    let tokens: Vec<&str> = tokens(text).collect();
    let mut repeated: Vec<&str> = Vec::new();

    for pair in tokens.windows(2) {
        if pair[0] == pair[1] && !repeated.contains(&pair[1]) {
            repeated.push(pair[1]);
        }
    }

    repeated
}

/// Look for consecutive duplicated words
#[must_use]
pub fn check_repeated_words(text: &str) -> CheckResult {
    let repeated = find_repeated_words(text);
    log::debug!("repeated words: {} distinct", repeated.len());

    if repeated.is_empty() {
        return CheckResult::ok("No repeated consecutive words found.");
    }

    CheckResult::new(
        Issue::RepeatedWords,
        format!("Repeated words found: {{{}}}", repeated.join(", ")),
    )
}
