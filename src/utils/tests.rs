// Utils module tests.

use super::*;

#[test]
fn test_never_matching_regex_matches_nothing() {
    let re = never_matching_regex();
    assert!(!re.is_match(""));
    assert!(!re.is_match("anything at all"));
}

#[test]
fn test_plain_and_rich_text_agree_on_text() {
    // A rich answer stripped for JSON-LD should read the same as its plain form
    let rich = sanitize_rich_text("<p>Use <strong>two</strong> cups.</p>");
    assert_eq!(strip_all_tags(&rich), "Use two cups.");
    assert_eq!(sanitize_text_field(&rich), "Use two cups.");
}

#[test]
fn test_escape_then_strip_round_trips_text() {
    let text = "Salt & pepper <to taste>";
    assert_eq!(strip_all_tags(&escape_html(text)), text);
}

#[test]
fn test_sanitized_rich_text_renders_as_paragraphs() {
    let rendered = autop(&sanitize_rich_text("Line one\n\nLine <em>two</em>"));
    assert_eq!(rendered, "<p>Line one</p>\n<p>Line <em>two</em></p>");
}
