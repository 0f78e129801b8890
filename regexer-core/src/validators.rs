// File: regexer-core/src/validators.rs
//! Precondition checks on caller-supplied input.
//!
//! The pattern is checked before the text, so a caller that leaves both empty
//! is asked for the pattern first.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::InputError;

/// Checks that both a pattern and some text were supplied.
///
/// Only emptiness is rejected; whitespace is valid text and a valid pattern.
pub fn validate_input(pattern: &str, text: &str) -> Result<(), InputError> {
    if pattern.is_empty() {
        return Err(InputError::MissingPattern);
    }
    if text.is_empty() {
        return Err(InputError::MissingText);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_is_reported_first() {
        assert_eq!(validate_input("", ""), Err(InputError::MissingPattern));
        assert_eq!(
            InputError::MissingPattern.to_string(),
            "Please enter a regular expression."
        );
    }

    #[test]
    fn empty_text_is_reported() {
        assert_eq!(validate_input("/test/g", ""), Err(InputError::MissingText));
        assert_eq!(InputError::MissingText.to_string(), "Please enter some text to test.");
    }

    #[test]
    fn whitespace_is_accepted() {
        assert!(validate_input(" ", "\n").is_ok());
    }
}
