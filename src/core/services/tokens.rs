//! Whitespace tokenization shared by the detectors
//!
//! Separators are Unicode whitespace plus the ASCII information separators
//! U+001C..=U+001F, the same set Python's `str.split()` splits on.

/// Whether `c` separates tokens
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Non-empty tokens of `text`, in order
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|t| !t.is_empty())
}
