// regexer-core/src/render.rs
//! Turns match spans into per-character segments for presentation.
//!
//! Concatenating the `text` of every segment returned by [`build_segments`]
//! gives back the source text exactly, whatever the match count.

use serde::{Deserialize, Serialize};

use crate::config::RegexerConfig;
use crate::engine::MatchEngine;
use crate::engines::regex_engine::RegexEngine;
use crate::errors::RenderError;
use crate::match_span::MatchSpan;
use crate::patterns::compiler::CompiledMatcher;

/// One character of the source text, classified as matched or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl Segment {
    fn plain(c: char) -> Self {
        Self { text: c.to_string(), is_match: false }
    }

    fn highlighted(c: char) -> Self {
        Self { text: c.to_string(), is_match: true }
    }
}

/// Everything a presenter needs for one pattern/text pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub spans: Vec<MatchSpan>,
    pub segments: Vec<Segment>,
}

impl RenderOutput {
    pub fn match_count(&self) -> usize {
        self.spans.len()
    }

    pub fn count_description(&self) -> String {
        describe_count(self.match_count())
    }

    /// Rebuilds the source text from the segments.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Human-readable match count.
pub fn describe_count(count: usize) -> String {
    match count {
        0 => "There were no matches".to_string(),
        1 => "There was one match:".to_string(),
        n => format!("There are {} matches:", n),
    }
}

/// Splits `text` into segments, highlighting every character covered by a span.
///
/// Spans must be ordered, disjoint and on character boundaries. A span that
/// starts before the end of the previous one, or that leaves the text, is
/// rejected rather than repaired.
pub fn build_segments(spans: &[MatchSpan], text: &str) -> Result<Vec<Segment>, RenderError> {
    let mut segments = Vec::with_capacity(text.len());
    let mut cursor = 0usize;

    for span in spans {
        let well_formed = span.start >= cursor
            && span.end >= span.start
            && span.end <= text.len()
            && text.is_char_boundary(span.start)
            && text.is_char_boundary(span.end);
        if !well_formed {
            return Err(RenderError::UnorderedSpans {
                start: span.start,
                end: span.end,
                cursor,
                len: text.len(),
            });
        }

        segments.extend(text[cursor..span.start].chars().map(Segment::plain));
        segments.extend(text[span.start..span.end].chars().map(Segment::highlighted));
        cursor = span.end;
    }

    segments.extend(text[cursor..].chars().map(Segment::plain));
    Ok(segments)
}

/// Enumerates the matches of `matcher` in `text` and builds the segments.
pub fn render(matcher: &CompiledMatcher, text: &str) -> Result<RenderOutput, RenderError> {
    RegexEngine::from_matcher(matcher.clone(), RegexerConfig::default()).render(text)
}

/// Like [`render`], with an explicit enumeration cap.
pub fn render_with_cap(
    matcher: &CompiledMatcher,
    text: &str,
    iteration_cap: usize,
) -> Result<RenderOutput, RenderError> {
    let config = RegexerConfig {
        iteration_cap: Some(iteration_cap),
        ..RegexerConfig::default()
    };
    RegexEngine::from_matcher(matcher.clone(), config).render(text)
}
