//! HTML presentation of a render result.
//!
//! The count sits in a `result__count__text` paragraph followed by
//! one `<span>` per character, matched characters carrying the
//! `highlight__match` class. Every character is escaped individually.

use regexer_core::RenderOutput;

const COUNT_CLASS: &str = "result__count__text";
const MATCH_CLASS: &str = "highlight__match";

/// Escapes a character for use inside element content or attribute values.
fn escape_char(c: char, out: &mut String) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        escape_char(c, &mut out);
    }
    out
}

/// Renders the full results markup.
///
/// With no matches only the count paragraph is produced.
pub fn render_html(output: &RenderOutput, newlines_as_breaks: bool) -> String {
    let mut html = format!(
        "<p class=\"{}\">{}</p>",
        COUNT_CLASS,
        escape_html(&output.count_description())
    );
    if output.match_count() == 0 {
        return html;
    }

    for segment in &output.segments {
        if segment.is_match {
            html.push_str(&format!("<span class=\"{}\">", MATCH_CLASS));
        } else {
            html.push_str("<span>");
        }
        for c in segment.text.chars() {
            if newlines_as_breaks && c == '\n' {
                html.push_str("<br/>");
            } else {
                escape_char(c, &mut html);
            }
        }
        html.push_str("</span>");
    }
    html
}
