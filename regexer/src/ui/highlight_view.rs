//! Terminal presentation of a render result.
//!
//! Consecutive segments with the same classification are written as one run.
//! With colour, matched runs get the `match_text` style; without colour they
//! are wrapped in `[` `]`. Adjacent matches therefore share one marker pair in
//! plain output.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use regexer_core::{RenderOutput, Segment};

use crate::ui::theme::{style_for, ThemeEntry, ThemeMap};

/// Groups segments into `(is_match, text)` runs.
pub fn segment_runs(segments: &[Segment]) -> Vec<(bool, String)> {
    let mut runs: Vec<(bool, String)> = Vec::new();
    for segment in segments {
        match runs.last_mut() {
            Some((is_match, text)) if *is_match == segment.is_match => text.push_str(&segment.text),
            _ => runs.push((segment.is_match, segment.text.clone())),
        }
    }
    runs
}

/// Writes the count line and, when there are matches, the highlighted text.
pub fn write_highlighted<W: Write>(
    writer: &mut W,
    output: &RenderOutput,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let description = output.count_description();
    if supports_color {
        writeln!(writer, "{}", description.style(style_for(theme, ThemeEntry::SummaryCount)))?;
    } else {
        writeln!(writer, "{}", description)?;
    }

    if output.match_count() == 0 {
        return Ok(());
    }

    let match_style = style_for(theme, ThemeEntry::MatchText);
    let plain_style = style_for(theme, ThemeEntry::PlainText);
    for (is_match, text) in segment_runs(&output.segments) {
        match (is_match, supports_color) {
            (true, true) => write!(writer, "{}", text.style(match_style))?,
            (false, true) => write!(writer, "{}", text.style(plain_style))?,
            (true, false) => write!(writer, "[{}]", text)?,
            (false, false) => write!(writer, "{}", text)?,
        }
    }
    if !output.segments.last().is_some_and(|s| s.text == "\n") {
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use regexer_core::{compile, render};

    fn plain(pattern: &str, text: &str) -> String {
        let output = render(&compile(pattern).unwrap(), text).unwrap();
        let mut out = Vec::new();
        write_highlighted(&mut out, &output, &ThemeStyle::default_theme_map(), false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn runs_merge_neighbours() {
        let output = render(&compile("/test/g").unwrap(), "Yo! test").unwrap();
        assert_eq!(
            segment_runs(&output.segments),
            vec![(false, "Yo! ".to_string()), (true, "test".to_string())]
        );
    }

    #[test]
    fn plain_output_brackets_matches() {
        assert_eq!(plain("/test/g", "Yo! test"), "There was one match:\nYo! [test]\n");
    }

    #[test]
    fn no_match_prints_only_the_count() {
        assert_eq!(plain("hello", "This is a test"), "There were no matches\n");
    }

    #[test]
    fn trailing_newline_is_not_doubled() {
        assert_eq!(plain("b", "ab\n"), "There was one match:\na[b]\n");
    }
}
