//! Configuration management for `regexer-core`.
//!
//! Holds the limits applied while compiling patterns and enumerating matches.
//! Defaults are embedded from `config/default_config.yaml`; a user YAML file
//! only needs to name the keys it wants to change and is merged on top.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum allowed length for a pattern body, in bytes.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Compiled regex size limit used when no configuration says otherwise.
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Effective configuration for compiling and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RegexerConfig {
    /// Longest pattern body accepted by the compiler.
    pub max_pattern_length: usize,
    /// Upper bound on the compiled program size handed to `RegexBuilder`.
    pub size_limit: usize,
    /// Fixed cap on enumeration steps. `None` derives the cap from the text length.
    pub iteration_cap: Option<usize>,
    /// Markup presenters turn `\n` into `<br/>` when set.
    pub newlines_as_breaks: bool,
}

impl Default for RegexerConfig {
    fn default() -> Self {
        Self {
            max_pattern_length: MAX_PATTERN_LENGTH,
            size_limit: DEFAULT_SIZE_LIMIT,
            iteration_cap: None,
            newlines_as_breaks: true,
        }
    }
}

/// A user-supplied configuration file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub max_pattern_length: Option<usize>,
    pub size_limit: Option<usize>,
    pub iteration_cap: Option<usize>,
    pub newlines_as_breaks: Option<bool>,
}

impl RegexerConfig {
    /// Loads the built-in configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: RegexerConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default configuration")?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Loads the built-in configuration and merges a user file over it.
    pub fn load_with_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let overrides = load_overrides_from_file(path)?;
        let merged = merge_config(Self::load_default()?, Some(overrides));
        validate_config(&merged)?;
        Ok(merged)
    }

    /// Enumeration cap for a text of `text_len` bytes.
    ///
    /// Each enumeration step moves the cursor forward by at least one byte, so
    /// `text_len + 2` steps can only be exceeded by a broken pass.
    pub fn iteration_cap_for(&self, text_len: usize) -> usize {
        self.iteration_cap
            .unwrap_or_else(|| text_len.saturating_add(2))
    }
}

/// Reads a YAML override file from disk.
pub fn load_overrides_from_file<P: AsRef<Path>>(path: P) -> Result<ConfigOverrides> {
    let path = path.as_ref();
    info!("Loading configuration from: {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    if text.trim().is_empty() {
        return Ok(ConfigOverrides::default());
    }
    let overrides: ConfigOverrides = serde_yml::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(overrides)
}

/// Applies user overrides on top of the defaults, field by field.
pub fn merge_config(default_config: RegexerConfig, user: Option<ConfigOverrides>) -> RegexerConfig {
    let mut merged = default_config;
    let Some(user) = user else {
        return merged;
    };

    if let Some(v) = user.max_pattern_length {
        debug!("Overriding max_pattern_length with user value: {}", v);
        merged.max_pattern_length = v;
    }
    if let Some(v) = user.size_limit {
        debug!("Overriding size_limit with user value: {}", v);
        merged.size_limit = v;
    }
    if let Some(v) = user.iteration_cap {
        debug!("Overriding iteration_cap with user value: {}", v);
        merged.iteration_cap = Some(v);
    }
    if let Some(v) = user.newlines_as_breaks {
        merged.newlines_as_breaks = v;
    }
    merged
}

/// Rejects limits that would make every pattern or text fail.
pub fn validate_config(config: &RegexerConfig) -> Result<()> {
    let mut errors = Vec::new();
    if config.max_pattern_length == 0 {
        errors.push("`max_pattern_length` must be greater than zero.".to_string());
    }
    if config.size_limit == 0 {
        errors.push("`size_limit` must be greater than zero.".to_string());
    }
    if config.iteration_cap == Some(0) {
        errors.push("`iteration_cap` must be greater than zero when set.".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Configuration validation failed:\n{}", errors.join("\n")))
    }
}
