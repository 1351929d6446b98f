//! Quality-check services
//!
//! Pure functions over an input text. Each detector is independent and
//! stateless; the aggregator runs them all and builds a report.
//!
//! - [`language`] - Arabic/Latin script mixing
//! - [`repetition`] - Consecutive duplicated tokens
//! - [`tokens`] - Token splitting shared by repetition and length
//! - [`length`] - Word-count bounds
//! - [`charset`] - Characters outside the allow-list
//! - [`report`] - Runs every detector and aggregates the results

pub mod charset;
pub mod language;
pub mod length;
pub mod repetition;
pub mod report;
pub mod tokens;

pub use charset::{check_special_characters, find_unusual_chars};
pub use language::{ScriptCounts, check_language_mixing};
pub use length::{check_text_length, check_text_length_with, word_count};
pub use repetition::{check_repeated_words, find_repeated_words};
pub use report::{CHECKS, CheckSpec, Detector, run_quality_check, run_quality_check_with};
pub use tokens::{is_separator, tokens};
