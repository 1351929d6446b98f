//! Domain models for arabic-quality
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Issue`] - Closed set of issue tags, with `Issue::None` as the sentinel
//! - [`CheckResult`] - What one detector reported
//! - [`LengthBounds`] / [`CheckOptions`] - Per-run configuration
//! - [`QualityReport`] - Ordered results of every detector plus the issue count

mod bounds;
mod check_result;
mod issue;
mod report;

pub use bounds::{BoundsError, CheckOptions, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS, LengthBounds};
pub use check_result::CheckResult;
pub use issue::Issue;
pub use report::{CheckEntry, QualityReport};
