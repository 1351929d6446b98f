//! Shared test fixtures and helpers
//!
//! Sample texts and builders used across the unit tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Clean Arabic sentence: 13 words, no Latin, no repeats
pub const CLEAN_TEXT: &str =
    "الذكاء الاصطناعي يغير العالم بسرعة كبيرة وسوف يستمر في التطور في السنوات القادمة";

/// Repeated words plus a run of English
pub const MIXED_TEXT: &str =
    "هذا النص النص يحتوي على على كلمات مكررة وأيضا some English words mixed in";

/// A single word
pub const SHORT_TEXT: &str = "مرحبا";

/// `n` copies of one Arabic word separated by spaces
pub fn words(n: usize) -> String {
    vec!["كلمة"; n].join(" ")
}

/// `arabic` Arabic letters and `latin` Latin letters, as two tokens
pub fn mixed(arabic: usize, latin: usize) -> String {
    format!("{} {}", "ب".repeat(arabic), "x".repeat(latin))
}

/// A temporary directory holding config files
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Root of the directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
