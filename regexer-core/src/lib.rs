// regexer-core/src/lib.rs
//! # Regexer Core Library
//!
//! `regexer-core` turns a user-typed pattern and a body of text into a list of
//! highlighted and plain segments plus a match count. It has no I/O and keeps
//! no state between calls.
//!
//! ## Modules
//!
//! * `patterns`: Parses `/body/flags` or bare input into a `CompiledMatcher`.
//! * `engine`: Defines the `MatchEngine` trait.
//! * `engines`: Concrete engines; `RegexEngine` enumerates matches.
//! * `render`: Builds per-character segments and the count description.
//! * `match_span`: The `MatchSpan` type and its debug logging.
//! * `report`: JSON summary with byte and UTF-16 offsets.
//! * `validators`: Input precondition checks.
//! * `config`: Limits for compilation and enumeration, loaded from YAML.
//! * `store`: The key-value interface used to remember the last session.
//! * `headless`: One-shot convenience wrapper.
//!
//! ## Usage Example
//!
//! ```rust
//! use regexer_core::{headless_highlight, RegexerConfig};
//!
//! let output = headless_highlight("/test/g", "Yo! test", &RegexerConfig::default()).unwrap();
//! assert_eq!(output.count_description(), "There was one match:");
//! assert_eq!(output.spans[0].start, 4);
//! assert!(output.segments[4].is_match);
//! ```
//!
//! ## Error Handling
//!
//! Each stage returns its own error enum (`InputError`, `CompileError`,
//! `RenderError`); `RegexerError` wraps them for the headless API.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod match_span;
pub mod patterns;
pub mod render;
pub mod report;
pub mod store;
pub mod validators;

/// Re-exports the configuration types.
pub use config::{merge_config, ConfigOverrides, RegexerConfig, MAX_PATTERN_LENGTH};

/// Re-exports the error types.
pub use errors::{CompileError, InputError, RegexerError, RenderError};

/// Re-exports the engine trait and its regex implementation.
pub use engine::MatchEngine;
pub use engines::regex_engine::{find_spans, RegexEngine};

/// Re-exports the pattern compiler.
pub use patterns::compiler::{compile, compile_with, CompiledMatcher};
pub use patterns::flags::PatternFlags;

/// Re-exports match and segment types.
pub use match_span::MatchSpan;
pub use render::{build_segments, describe_count, render, RenderOutput, Segment};
pub use report::{MatchReport, ReportSpan};

/// Re-exports the session store interface.
pub use store::{load_session, save_session, MemorySessionStore, SavedSession, SessionStore};

pub use headless::headless_highlight;
pub use validators::validate_input;
