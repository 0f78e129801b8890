// regexer-core/tests/highlight_tests.rs
//! End-to-end checks of compile -> enumerate -> segment.

use regexer_core::{
    build_segments, compile, headless_highlight, render, CompileError, MatchEngine, RegexEngine,
    RegexerConfig,
};

const SENTENCES: &str = "This is a test string. This is another test string.";

fn highlighted(text: &str, pattern: &str) -> String {
    let output = render(&compile(pattern).unwrap(), text).unwrap();
    output
        .segments
        .iter()
        .map(|s| if s.is_match { s.text.to_uppercase() } else { s.text.clone() })
        .collect()
}

#[test]
fn non_global_pattern_yields_first_match() {
    let output = render(&compile("/test/").unwrap(), SENTENCES).unwrap();
    assert_eq!(output.match_count(), 1);
    assert_eq!(output.spans[0].start, 10);
    assert_eq!(output.spans[0].matched_text, "test");
    assert_eq!(output.count_description(), "There was one match:");
}

#[test]
fn bare_pattern_yields_every_match() {
    let output = render(&compile("test").unwrap(), SENTENCES).unwrap();
    let starts: Vec<usize> = output.spans.iter().map(|s| s.start).collect();
    assert_eq!(starts, vec![10, 39]);
    assert_eq!(output.count_description(), "There are 2 matches:");
}

#[test]
fn no_match_yields_plain_text() {
    let text = "This is a test";
    let output = render(&compile("hello").unwrap(), text).unwrap();
    assert_eq!(output.match_count(), 0);
    assert_eq!(output.count_description(), "There were no matches");
    assert!(output.segments.iter().all(|s| !s.is_match));
    assert_eq!(output.text(), text);
}

#[test]
fn slash_pattern_segments() {
    let output = render(&compile("/test/g").unwrap(), "Yo! test").unwrap();
    let texts: Vec<&str> = output.segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["Y", "o", "!", " ", "t", "e", "s", "t"]);
    assert!(output.segments[..4].iter().all(|s| !s.is_match));
    assert!(output.segments[4..].iter().all(|s| s.is_match));
}

#[test]
fn malformed_pattern_is_a_value_not_a_panic() {
    assert!(matches!(compile("/[/g"), Err(CompileError::Syntax { .. })));
}

#[test]
fn case_insensitive_and_dot_all_flags() {
    assert_eq!(highlighted("Ab ab", "/ab/gi"), "AB AB");
    assert_eq!(highlighted("a\nb", "/a.b/s"), "A\nB");
    assert_eq!(highlighted("a\nb", "/a.b/g"), "a\nb");
}

#[test]
fn segments_always_rebuild_the_text() {
    let texts = [
        "",
        "plain",
        "héllo wörld €",
        "line one\nline two\n",
        "aaaa",
        SENTENCES,
    ];
    let patterns = [
        "test", "/test/", "/x*/g", "/(?:)/g", "/^/gm", "/$/gm", "/\\b/g", "/a+/g", "/./gs", "//",
        "/[éö€]/g", "/o|l/g", "/a*?/g",
    ];
    for text in texts {
        for pattern in patterns {
            let output = render(&compile(pattern).unwrap(), text).unwrap();
            assert_eq!(output.text(), text, "pattern {} on {:?}", pattern, text);
            assert_eq!(output.segments.len(), text.chars().count());
        }
    }
}

#[test]
fn spans_are_ordered_and_disjoint() {
    for pattern in ["/a*/g", "/\\b/g", "/$/gm", "/.?/g"] {
        let engine = RegexEngine::new(pattern).unwrap();
        let spans = engine.find_spans("baab aab\nb").unwrap();
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start, "{} overlaps in {:?}", pattern, pair);
            assert!(pair[0].start < pair[1].start);
        }
        assert!(build_segments(&spans, "baab aab\nb").is_ok());
    }
}

#[test]
fn word_boundaries_see_text_before_the_cursor() {
    // The third search starts at offset 3, right after a "b"; \b must not
    // treat that offset as the start of a word.
    let engine = RegexEngine::new("/\\bb/g").unwrap();
    let spans = engine.find_spans("b bb").unwrap();
    let starts: Vec<usize> = spans.iter().map(|s| s.start).collect();
    assert_eq!(starts, vec![0, 2]);
}

#[test]
fn headless_and_engine_agree() {
    let config = RegexerConfig::default();
    let direct = render(&compile("/s/g").unwrap(), SENTENCES).unwrap();
    let headless = headless_highlight("/s/g", SENTENCES, &config).unwrap();
    assert_eq!(direct, headless);
}
