//! Pattern parsing for Regexer.
//!
//! `compiler` splits slash-delimited input into body and flags and builds the
//! regular expression; `flags` owns the flag letters and their validation.

pub mod compiler;
pub mod flags;
