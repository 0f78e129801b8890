// regexer-core/src/engines/regex_engine.rs
//! A `MatchEngine` implementation backed by the `regex` crate.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::RegexerConfig;
use crate::engine::MatchEngine;
use crate::errors::{CompileError, RenderError};
use crate::match_span::{log_span_debug, MatchSpan};
use crate::patterns::compiler::{compile_with, CompiledMatcher};

/// Collects the matches of `matcher` in `text`, in order.
///
/// A non-global matcher searches once from offset 0. A global matcher keeps
/// searching from a cursor owned by this call:
///
/// * after a non-empty match the cursor moves to the match end;
/// * after an empty match it moves one character past the match start, and
///   an empty match at the very end of the text stops the pass.
///
/// The cursor strictly increases on every step. `iteration_cap` bounds the
/// number of searches; exceeding it is an error, not a truncated result.
///
/// Sticky matchers only accept a match that begins exactly at the cursor.
pub fn find_spans(
    matcher: &CompiledMatcher,
    text: &str,
    iteration_cap: usize,
) -> Result<Vec<MatchSpan>, RenderError> {
    let mut spans = Vec::new();
    let mut cursor = 0usize;
    let mut iterations = 0usize;

    while cursor <= text.len() {
        iterations += 1;
        if iterations > iteration_cap {
            return Err(RenderError::IterationLimit(iteration_cap));
        }

        let Some(found) = matcher.regex.find_at(text, cursor) else {
            break;
        };
        if matcher.is_sticky() && found.start() != cursor {
            break;
        }

        let span = MatchSpan::new(found.start(), found.end(), text);
        log_span_debug(module_path!(), &span);
        spans.push(span);

        if !matcher.is_global {
            break;
        }

        cursor = if found.end() > found.start() {
            found.end()
        } else {
            match text[found.start()..].chars().next() {
                Some(c) => found.start() + c.len_utf8(),
                None => break,
            }
        };
    }

    debug!("Enumeration finished: {} match(es) in {} step(s).", spans.len(), iterations);
    Ok(spans)
}

/// Matches text with a single compiled pattern.
#[derive(Debug, Clone)]
pub struct RegexEngine {
    matcher: CompiledMatcher,
    config: RegexerConfig,
}

impl RegexEngine {
    /// Compiles `raw` with the default configuration.
    pub fn new(raw: &str) -> Result<Self, CompileError> {
        Self::with_config(raw, RegexerConfig::default())
    }

    pub fn with_config(raw: &str, config: RegexerConfig) -> Result<Self, CompileError> {
        let matcher = compile_with(raw, &config)?;
        Ok(Self { matcher, config })
    }

    /// Wraps an already compiled matcher.
    pub fn from_matcher(matcher: CompiledMatcher, config: RegexerConfig) -> Self {
        Self { matcher, config }
    }
}

impl MatchEngine for RegexEngine {
    fn find_spans(&self, text: &str) -> Result<Vec<MatchSpan>, RenderError> {
        find_spans(&self.matcher, text, self.config.iteration_cap_for(text.len()))
    }

    fn matcher(&self) -> &CompiledMatcher {
        &self.matcher
    }

    fn config(&self) -> &RegexerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::compiler::compile;

    const SENTENCES: &str = "This is a test string. This is another test string.";

    fn starts(spans: &[MatchSpan]) -> Vec<usize> {
        spans.iter().map(|s| s.start).collect()
    }

    fn spans_of(raw: &str, text: &str) -> Vec<MatchSpan> {
        find_spans(&compile(raw).unwrap(), text, text.len() + 2).unwrap()
    }

    #[test]
    fn non_global_finds_first_match_only() {
        let spans = spans_of("/test/", SENTENCES);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 10);
        assert_eq!(spans[0].matched_text, "test");
    }

    #[test]
    fn global_finds_every_match() {
        assert_eq!(starts(&spans_of("test", SENTENCES)), vec![10, 39]);
        assert_eq!(starts(&spans_of("/test/g", SENTENCES)), vec![10, 39]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(spans_of("hello", "This is a test").is_empty());
        assert!(spans_of("/hello/", "This is a test").is_empty());
    }

    #[test]
    fn empty_matches_advance_one_character() {
        let spans = spans_of("/x*/g", "ab");
        assert_eq!(starts(&spans), vec![0, 1, 2]);
        assert!(spans.iter().all(MatchSpan::is_empty));
    }

    #[test]
    fn empty_matches_step_over_multibyte_characters() {
        let spans = spans_of("/(?:)/g", "é€");
        assert_eq!(starts(&spans), vec![0, 2, 5]);
    }

    #[test]
    fn empty_match_after_non_empty_match() {
        // "a*" on "baab": "" at 0, "aa" at 1..3, "" at 3, "" at 4.
        let spans = spans_of("/a*/g", "baab");
        let ranges: Vec<(usize, usize)> = spans.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(ranges, vec![(0, 0), (1, 3), (3, 3), (4, 4)]);
    }

    #[test]
    fn line_anchors_in_multi_line_mode() {
        assert_eq!(starts(&spans_of("/^/gm", "a\nb\nc")), vec![0, 2, 4]);
    }

    #[test]
    fn empty_body_matches_once_at_start() {
        let spans = spans_of("//", "abc");
        assert_eq!(spans, vec![MatchSpan::new(0, 0, "abc")]);
    }

    #[test]
    fn empty_text_and_empty_pattern() {
        assert_eq!(spans_of("/(?:)/g", "").len(), 1);
        assert!(spans_of("a", "").is_empty());
    }

    #[test]
    fn sticky_requires_contiguous_matches() {
        assert_eq!(starts(&spans_of("/a/gy", "aab")), vec![0, 1]);
        assert!(spans_of("/b/y", "ab").is_empty());
    }

    #[test]
    fn iteration_cap_is_reported() {
        let matcher = compile("/x*/g").unwrap();
        assert_eq!(
            find_spans(&matcher, "abcdef", 3),
            Err(RenderError::IterationLimit(3))
        );
    }

    #[test]
    fn engine_from_matcher_keeps_matcher_and_config() {
        let config = RegexerConfig { newlines_as_breaks: false, ..Default::default() };
        let engine = RegexEngine::from_matcher(compile("/b/i").unwrap(), config);
        assert!(!engine.config().newlines_as_breaks);
        assert_eq!(engine.matcher().to_string(), "/b/i");
        let output = engine.render("aBc").unwrap();
        assert_eq!(output.spans, vec![MatchSpan::new(1, 2, "aBc")]);
        assert!(output.segments[1].is_match);
    }

    #[test]
    fn engine_uses_configured_cap() {
        let config = RegexerConfig { iteration_cap: Some(1), ..Default::default() };
        let engine = RegexEngine::with_config("a", config).unwrap();
        assert!(engine.find_spans("b").is_ok());
        assert!(matches!(engine.find_spans("aa"), Err(RenderError::IterationLimit(1))));
    }
}
