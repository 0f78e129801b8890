//! errors.rs - Custom error types for the regexer-core library.
//!
//! Each stage of the pipeline has its own error enum so callers can tell a bad
//! pattern apart from a missing argument or a broken enumeration pass.
//! `RegexerError` wraps all of them for the one-shot `headless` API.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// A pattern that could not be turned into a `CompiledMatcher`.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid regular expression /{body}/")]
    Syntax {
        body: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid flag '{0}' in regular expression flags")]
    InvalidFlag(char),

    #[error("Duplicate flag '{0}' in regular expression flags")]
    DuplicateFlag(char),

    #[error("Pattern length ({0}) exceeds maximum allowed ({1})")]
    PatternTooLong(usize, usize),
}

/// Caller-supplied arguments that fail basic shape checks.
///
/// The messages are the ones shown to the user, so keep them short.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a regular expression.")]
    MissingPattern,

    #[error("Please enter some text to test.")]
    MissingText,
}

/// Failures while enumerating matches or turning them into segments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Match span {start}..{end} is out of order or out of bounds (cursor at {cursor}, text length {len})")]
    UnorderedSpans {
        start: usize,
        end: usize,
        cursor: usize,
        len: usize,
    },

    #[error("Match enumeration exceeded {0} iterations")]
    IterationLimit(usize),
}

/// This enum represents all possible error types in the `regexer-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RegexerError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl RegexerError {
    /// True for errors the user can fix by changing what they typed.
    pub fn is_user_error(&self) -> bool {
        matches!(self, RegexerError::Input(_) | RegexerError::Compile(_))
    }
}
