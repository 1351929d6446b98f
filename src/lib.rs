//! arabic-quality - A heuristic quality auditor for Arabic text used as AI
//! training data
//!
//! The library inspects a single text and reports surface-level signals:
//! script mixing, consecutive repeated words, word count and characters
//! outside an allow-list.
//!
//! ```
//! use arabic_quality::core::services::run_quality_check;
//!
//! let report = run_quality_check("مرحبا");
//! assert_eq!(report.issues_found(), 1);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod paths;
