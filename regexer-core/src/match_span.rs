// regexer-core/src/match_span.rs
//! Match spans and the debug-logging helpers that report them.
//!
//! User text can be anything, so matched content is only written to debug
//! logs when `REGEXER_ALLOW_DEBUG_TEXT=true`.

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static TEXT_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("REGEXER_ALLOW_DEBUG_TEXT")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// One match found in the source text.
///
/// `start` and `end` are UTF-8 byte offsets into the source `&str` and always
/// fall on character boundaries. `end` is exclusive; `start == end` for an
/// empty match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub matched_text: String,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize, text: &str) -> Self {
        Self {
            start,
            end,
            matched_text: text[start..end].to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Hides the content of a match, keeping only its length.
pub fn redact_text(s: &str) -> String {
    const MAX_CHARS: usize = 8;
    let chars = s.chars().count();
    if chars <= MAX_CHARS {
        "[HIDDEN]".to_string()
    } else {
        format!("[HIDDEN: {} chars]", chars)
    }
}

fn get_loggable_content(content: &str) -> String {
    if *TEXT_DEBUG_ALLOWED {
        content.to_string()
    } else {
        redact_text(content)
    }
}

pub fn log_span_debug(module_path: &str, span: &MatchSpan) {
    debug!(
        "{} Found match {}..{}: '{}'",
        module_path,
        span.start,
        span.end,
        get_loggable_content(&span.matched_text)
    );
}
