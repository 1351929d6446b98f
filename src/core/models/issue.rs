//! Issue tags reported by the detectors
//!
//! Every detector reports exactly one tag per run. `Issue::None` is the
//! shared sentinel meaning the text passed that check.

use serde::{Deserialize, Serialize};

/// Issue tag attached to a [`CheckResult`](super::CheckResult)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    /// No issue found
    #[default]
    None,

    // Language mixing
    /// The text contains no Arabic-block characters at all
    NoArabic,
    /// More than 20% of the examined letters are Latin
    HighMixing,
    /// Between 5% (exclusive) and 20% (inclusive) of the examined letters are Latin
    ModerateMixing,

    // Repetition
    /// At least one token immediately repeats its predecessor
    RepeatedWords,

    // Length
    /// Fewer words than the configured minimum
    TooShort,
    /// More words than the configured maximum
    TooLong,

    // Character set
    /// Characters outside the allow-list were found
    UnusualChars,
}

impl Issue {
    /// Wire name of the tag, as it appears in JSON output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NoArabic => "no_arabic",
            Self::HighMixing => "high_mixing",
            Self::ModerateMixing => "moderate_mixing",
            Self::RepeatedWords => "repeated_words",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::UnusualChars => "unusual_chars",
        }
    }

    /// Whether this is the "no issue" sentinel
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Issue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "no_arabic" => Ok(Self::NoArabic),
            "high_mixing" => Ok(Self::HighMixing),
            "moderate_mixing" => Ok(Self::ModerateMixing),
            "repeated_words" => Ok(Self::RepeatedWords),
            "too_short" => Ok(Self::TooShort),
            "too_long" => Ok(Self::TooLong),
            "unusual_chars" => Ok(Self::UnusualChars),
            _ => Err(format!("Unknown issue tag: {s}")),
        }
    }
}
