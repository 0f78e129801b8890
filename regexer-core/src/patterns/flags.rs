//! The flag letters accepted after the closing `/` of a pattern.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CompileError;

/// The recognised flag set.
///
/// `unicode` and `has_indices` are accepted for compatibility with
/// JavaScript-style input; the engine always matches Unicode scalar values and
/// always reports offsets, so they change nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternFlags {
    pub global: bool,
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_all: bool,
    pub unicode: bool,
    pub sticky: bool,
    pub has_indices: bool,
}

impl PatternFlags {
    /// Flags implied by a bare, undelimited pattern.
    pub fn bare() -> Self {
        Self { global: true, ..Self::default() }
    }

    /// Parses a flag string such as `"gi"`. Order does not matter; each
    /// letter may appear once.
    pub fn parse(flags: &str) -> Result<Self, CompileError> {
        let mut result = Self::default();
        for c in flags.chars() {
            let slot = match c {
                'g' => &mut result.global,
                'i' => &mut result.case_insensitive,
                'm' => &mut result.multi_line,
                's' => &mut result.dot_all,
                'u' => &mut result.unicode,
                'y' => &mut result.sticky,
                'd' => &mut result.has_indices,
                other => return Err(CompileError::InvalidFlag(other)),
            };
            if *slot {
                return Err(CompileError::DuplicateFlag(c));
            }
            *slot = true;
        }
        Ok(result)
    }
}

impl fmt::Display for PatternFlags {
    /// Canonical order, matching what a JavaScript engine reports.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (set, letter) in [
            (self.has_indices, 'd'),
            (self.global, 'g'),
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
            (self.sticky, 'y'),
        ] {
            if set {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_letter() {
        let flags = PatternFlags::parse("gimsuyd").unwrap();
        assert!(flags.global && flags.case_insensitive && flags.multi_line);
        assert!(flags.dot_all && flags.unicode && flags.sticky && flags.has_indices);
    }

    #[test]
    fn empty_string_is_no_flags() {
        assert_eq!(PatternFlags::parse("").unwrap(), PatternFlags::default());
    }

    #[test]
    fn rejects_unknown_and_repeated() {
        assert!(matches!(PatternFlags::parse("gx"), Err(CompileError::InvalidFlag('x'))));
        assert!(matches!(PatternFlags::parse("gig"), Err(CompileError::DuplicateFlag('g'))));
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(PatternFlags::parse("ysig").unwrap().to_string(), "gisy");
        assert_eq!(PatternFlags::bare().to_string(), "g");
    }
}
