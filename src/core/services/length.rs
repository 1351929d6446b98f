//! Length validator

use super::tokens::tokens;
use crate::core::models::{CheckResult, Issue, LengthBounds};

/// Number of whitespace-delimited tokens
#[must_use]
pub fn word_count(text: &str) -> usize {
    tokens(text).count()
}

/// Check the word count against `min_words..=max_words`
#[must_use]
pub fn check_text_length(text: &str, min_words: usize, max_words: usize) -> CheckResult {
    let count = word_count(text);
    log::debug!("text length: {count} words (bounds {min_words}..={max_words})");

    if count < min_words {
        CheckResult::new(
            Issue::TooShort,
            format!("Text is too short ({count} words). Minimum is {min_words}."),
        )
    } else if count > max_words {
        CheckResult::new(
            Issue::TooLong,
            format!("Text is very long ({count} words). Consider splitting it."),
        )
    } else {
        CheckResult::ok(format!("Text length is acceptable ({count} words)."))
    }
}

/// [`check_text_length`] with bounds taken from a [`LengthBounds`]
#[must_use]
pub fn check_text_length_with(text: &str, bounds: &LengthBounds) -> CheckResult {
    check_text_length(text, bounds.min_words, bounds.max_words)
}
