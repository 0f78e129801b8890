// regexer/src/logger.rs
//! Logger setup for the `regexer` binary and its tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises `env_logger` once.
///
/// `Some(level)` forces that level for every module; `None` honours
/// `RUST_LOG` and falls back to warnings. Later calls are ignored, so tests
/// may call this freely.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false);
    let _ = builder.try_init();
}
