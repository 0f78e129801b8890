//! Themed one-line status messages written to stderr.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::ui::theme::{style_for, ThemeEntry, ThemeMap};

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let line = format!("{}{}", prefix, msg);
    if supports_color {
        writeln!(writer, "{}", line.style(style_for(theme, entry)))
    } else {
        writeln!(writer, "{}", line)
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Info, theme, supports_color)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Success, theme, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "Warning: ", msg, ThemeEntry::Warn, theme, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "Error: ", msg, ThemeEntry::Error, theme, supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_error_has_prefix_and_no_escapes() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_error_message(&mut out, "Please enter a regular expression.", &theme, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Error: Please enter a regular expression.\n");
    }

    #[test]
    fn colored_output_contains_escape_codes() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_warn_message(&mut out, "careful", &theme, true).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("\u{1b}["));
        assert!(s.contains("Warning: careful"));
    }
}
