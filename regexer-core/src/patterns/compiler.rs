//! compiler.rs - Turns user-typed pattern strings into `CompiledMatcher`s.
//!
//! Input is either slash-delimited (`/body/flags`) or a bare pattern. A bare
//! pattern is compiled with the global flag forced on, so it always
//! enumerates every match.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::RegexerConfig;
use crate::errors::CompileError;
use crate::patterns::flags::PatternFlags;

const DELIMITER: char = '/';

/// A pattern ready for matching.
///
/// Immutable once built. It carries no search position; enumeration passes
/// keep their own cursor.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    /// The pattern text between the delimiters (or the whole bare input).
    pub body: String,
    /// The flags that were parsed, with `global` forced on for bare input.
    pub flags: PatternFlags,
    /// True when every match is enumerated rather than just the first.
    pub is_global: bool,
    /// The compiled program.
    pub regex: Regex,
}

impl CompiledMatcher {
    pub fn is_sticky(&self) -> bool {
        self.flags.sticky
    }
}

impl fmt::Display for CompiledMatcher {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}/{}", self.body, self.flags)
    }
}

/// Splits raw input into `(body, flags)`.
///
/// Delimited input is split on every `/`: the leading empty piece is
/// dropped, the last piece is the flag string, and the rest is joined back
/// with `/` as the body. So `/a/b/g` has body `a/b`, and `/` or `//` both give
/// an empty body with no flags. Returns `None` for bare input.
pub fn split_delimited(raw: &str) -> Option<(String, &str)> {
    if !raw.starts_with(DELIMITER) {
        return None;
    }
    let mut pieces: Vec<&str> = raw.split(DELIMITER).skip(1).collect();
    let flags = pieces.pop().unwrap_or("");
    Some((pieces.join("/"), flags))
}

/// Compiles `raw` with the default configuration.
pub fn compile(raw: &str) -> Result<CompiledMatcher, CompileError> {
    compile_with(raw, &RegexerConfig::default())
}

/// Compiles `raw` using the limits in `config`.
pub fn compile_with(raw: &str, config: &RegexerConfig) -> Result<CompiledMatcher, CompileError> {
    let (body, flags) = match split_delimited(raw) {
        Some((body, flag_str)) => (body, PatternFlags::parse(flag_str)?),
        None => (raw.to_string(), PatternFlags::bare()),
    };

    if body.len() > config.max_pattern_length {
        return Err(CompileError::PatternTooLong(body.len(), config.max_pattern_length));
    }

    debug!("Attempting to compile pattern /{}/{}", body, flags);

    let regex = RegexBuilder::new(&body)
        .case_insensitive(flags.case_insensitive)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_all)
        .size_limit(config.size_limit)
        .build()
        .map_err(|source| CompileError::Syntax { body: body.clone(), source })?;

    debug!(
        target: "regexer_core::compiler",
        "Pattern compiled successfully (global: {}).",
        flags.global
    );

    Ok(CompiledMatcher {
        body,
        is_global: flags.global,
        flags,
        regex,
    })
}
