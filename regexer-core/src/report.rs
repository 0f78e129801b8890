// regexer-core/src/report.rs
//! Machine-readable summary of one render call.
//!
//! `start`/`end` are UTF-8 byte offsets into the source text, matching
//! [`MatchSpan`]. `start_utf16`/`end_utf16` give the same positions in UTF-16
//! code units, which is what browser-side consumers index strings by.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::match_span::MatchSpan;
use crate::patterns::compiler::CompiledMatcher;
use crate::render::{RenderOutput, Segment};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSpan {
    pub start: usize,
    pub end: usize,
    pub start_utf16: usize,
    pub end_utf16: usize,
    pub matched_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub pattern: String,
    pub flags: String,
    pub global: bool,
    pub count: usize,
    pub description: String,
    pub spans: Vec<ReportSpan>,
    pub segments: Vec<Segment>,
}

impl MatchReport {
    pub fn new(matcher: &CompiledMatcher, output: &RenderOutput) -> Self {
        let text = output.text();
        Self {
            pattern: matcher.body.clone(),
            flags: matcher.flags.to_string(),
            global: matcher.is_global,
            count: output.match_count(),
            description: output.count_description(),
            spans: with_utf16_offsets(&output.spans, &text),
            segments: output.segments.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Spans are ordered, so one running count over the text is enough.
fn with_utf16_offsets(spans: &[MatchSpan], text: &str) -> Vec<ReportSpan> {
    let mut byte_pos = 0usize;
    let mut utf16_pos = 0usize;
    let mut advance_to = |target: usize| {
        utf16_pos += text[byte_pos..target].encode_utf16().count();
        byte_pos = target;
        utf16_pos
    };

    spans
        .iter()
        .map(|span| {
            let start_utf16 = advance_to(span.start);
            let end_utf16 = advance_to(span.end);
            ReportSpan {
                start: span.start,
                end: span.end,
                start_utf16,
                end_utf16,
                matched_text: span.matched_text.clone(),
            }
        })
        .collect()
}
