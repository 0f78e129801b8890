//! Module for managing the application's command-line interface (CLI) theme.
//!
//! Users can recolour each kind of output with a YAML file mapping theme
//! entries to 16-colour ANSI names. Entries missing from the file keep their
//! default style.

use anyhow::{Context, Result};
use owo_colors::{AnsiColors, Style};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Style for section titles in `session show`.
    Header,
    /// Style for successful operation messages.
    Success,
    /// Style for general informational messages.
    Info,
    /// Style for warning messages.
    Warn,
    /// Style for error messages.
    Error,
    /// Style for characters inside a match.
    MatchText,
    /// Style for characters outside any match.
    PlainText,
    /// Style for the match count line.
    SummaryCount,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 8] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::MatchText,
        ThemeEntry::PlainText,
        ThemeEntry::SummaryCount,
    ];
}

/// Represents an ANSI color that can be used in the theme.
///
/// Deserialization goes through [`FromStr`], so a theme file naming an unknown
/// colour is rejected instead of being drawn in some fallback colour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white"
            | "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue"
            | "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        match color {
            ThemeColor::Named(name) => name,
        }
    }
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        ThemeColor::Named(name.to_string())
    }

    /// Converts the `ThemeColor` into its `owo_colors::AnsiColors` counterpart.
    /// Only a hand-built `Named` value can hold an unknown name; it maps to white.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.to_lowercase().as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// Foreground color.
    pub fg: Option<ThemeColor>,
    /// Background color.
    #[serde(default)]
    pub bg: Option<ThemeColor>,
    #[serde(default)]
    pub bold: bool,
}

impl ThemeStyle {
    fn fg(name: &str) -> Self {
        Self { fg: Some(ThemeColor::named(name)), ..Self::default() }
    }

    /// Builds the `owo_colors` style for this entry.
    pub fn to_owo_style(&self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = &self.fg {
            style = style.color(fg.to_ansi_color());
        }
        if let Some(bg) = &self.bg {
            style = style.on_color(bg.to_ansi_color());
        }
        if self.bold {
            style = style.bold();
        }
        style
    }

    /// Loads a theme configuration from a YAML file and fills in defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::Header, ThemeStyle { bold: true, ..ThemeStyle::fg("cyan") });
        default_theme.insert(ThemeEntry::Success, ThemeStyle::fg("green"));
        default_theme.insert(ThemeEntry::Info, ThemeStyle::fg("white"));
        default_theme.insert(ThemeEntry::Warn, ThemeStyle::fg("yellow"));
        default_theme.insert(ThemeEntry::Error, ThemeStyle::fg("red"));
        default_theme.insert(
            ThemeEntry::MatchText,
            ThemeStyle {
                fg: Some(ThemeColor::named("black")),
                bg: Some(ThemeColor::named("yellow")),
                bold: false,
            },
        );
        default_theme.insert(ThemeEntry::PlainText, ThemeStyle::default());
        default_theme.insert(ThemeEntry::SummaryCount, ThemeStyle { bold: true, ..ThemeStyle::default() });
        default_theme
    }
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

/// Looks up the style for `entry`, falling back to an unstyled one.
pub fn style_for(theme: &ThemeMap, entry: ThemeEntry) -> Style {
    theme.get(&entry).map(ThemeStyle::to_owo_style).unwrap_or_default()
}
