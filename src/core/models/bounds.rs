//! Length bounds and per-run check options

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default minimum number of words
pub const DEFAULT_MIN_WORDS: usize = 5;

/// Default maximum number of words
pub const DEFAULT_MAX_WORDS: usize = 200;

/// Errors raised when building length bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundsError {
    /// The minimum exceeds the maximum
    #[error("invalid length bounds: min_words ({min}) is greater than max_words ({max})")]
    Inverted {
        /// Requested minimum
        min: usize,
        /// Requested maximum
        max: usize,
    },
}

/// Inclusive word-count bounds for the length validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LengthBounds {
    /// Fewest words accepted
    pub min_words: usize,
    /// Most words accepted
    pub max_words: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl LengthBounds {
    /// Create bounds, rejecting `min_words > max_words`
    pub const fn new(min_words: usize, max_words: usize) -> Result<Self, BoundsError> {
        if min_words > max_words {
            return Err(BoundsError::Inverted {
                min: min_words,
                max: max_words,
            });
        }
        Ok(Self {
            min_words,
            max_words,
        })
    }

    /// Re-check an already constructed value (e.g. one deserialized from TOML)
    pub const fn validate(self) -> Result<Self, BoundsError> {
        Self::new(self.min_words, self.max_words)
    }

    /// Replace either bound, keeping the other
    pub fn with_overrides(
        self,
        min_words: Option<usize>,
        max_words: Option<usize>,
    ) -> Result<Self, BoundsError> {
        Self::new(min_words.unwrap_or(self.min_words), max_words.unwrap_or(self.max_words))
    }
}

/// Options shared by one quality-check run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckOptions {
    /// Word-count bounds for the length validator
    pub length: LengthBounds,
}
