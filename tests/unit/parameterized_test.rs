//! Parameterized tests using test-case
//!
//! Threshold and boundary behavior of the detectors.

use arabic_quality::core::models::Issue;
use arabic_quality::core::services::{
    check_language_mixing, check_special_characters, check_text_length, find_unusual_chars,
};
use test_case::test_case;

use crate::common::{mixed, words};

// =============================================================================
// Mixing Ratio Tests
// =============================================================================

#[test_case(10, 0, Issue::None ; "pure arabic")]
#[test_case(19, 1, Issue::None ; "exactly five percent")]
#[test_case(9, 1, Issue::ModerateMixing ; "ten percent")]
#[test_case(8, 2, Issue::ModerateMixing ; "exactly twenty percent")]
#[test_case(3, 1, Issue::HighMixing ; "twenty five percent")]
#[test_case(1, 9, Issue::HighMixing ; "mostly latin")]
#[test_case(0, 5, Issue::NoArabic ; "latin only")]
#[test_case(0, 0, Issue::NoArabic ; "neither script")]
fn test_mixing_thresholds(arabic: usize, latin: usize, expected: Issue) {
    assert_eq!(check_language_mixing(&mixed(arabic, latin)).issue, expected);
}

#[test_case(9, 1, "Some language mixing detected (10% non-Arabic)." ; "moderate message")]
#[test_case(1, 1, "High language mixing detected. 50% non-Arabic characters." ; "high message")]
#[test_case(2, 1, "High language mixing detected. 33% non-Arabic characters." ; "rounds down")]
#[test_case(1, 2, "High language mixing detected. 67% non-Arabic characters." ; "rounds up")]
#[test_case(35, 5, "Some language mixing detected (12% non-Arabic)." ; "half twelve rounds to even")]
#[test_case(31, 9, "High language mixing detected. 22% non-Arabic characters." ; "half twenty two rounds to even")]
fn test_mixing_messages(arabic: usize, latin: usize, expected: &str) {
    assert_eq!(check_language_mixing(&mixed(arabic, latin)).message, expected);
}

// =============================================================================
// Length Boundary Tests
// =============================================================================

#[test_case(0, Issue::TooShort ; "empty")]
#[test_case(4, Issue::TooShort ; "one below min")]
#[test_case(5, Issue::None ; "at min")]
#[test_case(100, Issue::None ; "between")]
#[test_case(200, Issue::None ; "at max")]
#[test_case(201, Issue::TooLong ; "one above max")]
fn test_length_boundaries(count: usize, expected: Issue) {
    assert_eq!(check_text_length(&words(count), 5, 200).issue, expected);
}

#[test_case(2, 4, 1, Issue::TooShort ; "custom min")]
#[test_case(2, 4, 5, Issue::TooLong ; "custom max")]
#[test_case(0, 0, 0, Issue::None ; "zero bounds accept empty")]
fn test_custom_length_bounds(min: usize, max: usize, count: usize, expected: Issue) {
    assert_eq!(check_text_length(&words(count), min, max).issue, expected);
}

// =============================================================================
// Character Set Tests
// =============================================================================

#[test_case('😀' ; "emoji")]
#[test_case('ж' ; "cyrillic")]
#[test_case('é' ; "accented latin")]
#[test_case('\u{200F}' ; "right to left mark")]
#[test_case('\u{0750}' ; "arabic supplement")]
fn test_unusual_char_flagged(c: char) {
    let text = format!("نص {c} نص");
    let result = check_special_characters(&text);
    assert_eq!(result.issue, Issue::UnusualChars);
    assert_eq!(find_unusual_chars(&text), vec![c]);
    assert!(result.message.contains(c));
}

#[test_case('\u{060C}' ; "arabic comma")]
#[test_case('\u{061B}' ; "arabic semicolon")]
#[test_case('\u{061F}' ; "arabic question mark")]
#[test_case('\u{0640}' ; "tatweel")]
#[test_case('~' ; "ascii tilde")]
#[test_case('\n' ; "newline")]
#[test_case('\t' ; "tab")]
fn test_allowed_char_passes(c: char) {
    let text = format!("نص{c}نص");
    assert_eq!(check_special_characters(&text).issue, Issue::None);
}
