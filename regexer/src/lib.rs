// regexer/src/lib.rs
//! # Regexer CLI Application
//!
//! Command-line front end for `regexer-core`: reads a pattern and some text,
//! prints the match count and the text with every match highlighted, and
//! remembers the last input between runs.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

pub use commands::dispatch;
