// File: regexer-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for a full, one-shot highlight of a string.
//! Validates input, compiles the pattern and renders in a single call.

use log::debug;

use crate::config::RegexerConfig;
use crate::engine::MatchEngine;
use crate::engines::regex_engine::RegexEngine;
use crate::errors::RegexerError;
use crate::render::RenderOutput;
use crate::validators::validate_input;

/// Highlights every match of `pattern` in `text`.
///
/// # Arguments
///
/// * `pattern` - The raw pattern, either `/body/flags` or a bare pattern.
/// * `text` - The text to search.
/// * `config` - Limits for compilation and enumeration.
pub fn headless_highlight(
    pattern: &str,
    text: &str,
    config: &RegexerConfig,
) -> Result<RenderOutput, RegexerError> {
    validate_input(pattern, text)?;
    let engine: Box<dyn MatchEngine> = Box::new(RegexEngine::with_config(pattern, config.clone())?);
    let output = engine.render(text)?;
    debug!(
        "Highlighted {} match(es) for {}.",
        output.match_count(),
        engine.matcher()
    );
    Ok(output)
}
