// regexer-core/src/engine.rs
//! Defines the core `MatchEngine` trait.
//!
//! Presenters only need spans, segments and a count description; the trait
//! keeps them independent of how a pattern is compiled and searched.
//!
//! License: MIT OR APACHE 2.0

use crate::config::RegexerConfig;
use crate::errors::RenderError;
use crate::match_span::MatchSpan;
use crate::patterns::compiler::CompiledMatcher;
use crate::render::{build_segments, RenderOutput};

/// A trait that defines the core functionality of a match engine.
pub trait MatchEngine: Send + Sync {
    /// Enumerates the matches in `text`, ordered by start offset and disjoint.
    fn find_spans(&self, text: &str) -> Result<Vec<MatchSpan>, RenderError>;

    /// Enumerates matches and splits `text` into highlighted and plain segments.
    fn render(&self, text: &str) -> Result<RenderOutput, RenderError> {
        let spans = self.find_spans(text)?;
        let segments = build_segments(&spans, text)?;
        Ok(RenderOutput { spans, segments })
    }

    /// Returns the matcher the engine searches with.
    fn matcher(&self) -> &CompiledMatcher;

    /// Returns a reference to the engine's configuration.
    fn config(&self) -> &RegexerConfig;
}
