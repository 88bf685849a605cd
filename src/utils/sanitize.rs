//! Utilities for sanitizing author input.
//!
//! Plain-text fields lose all markup; rich-text fields keep an allowlisted
//! subset of tags and attributes. Everything is parsed as an HTML fragment with
//! `scraper`, so entities are decoded and broken markup is repaired before any
//! decision is made.

use scraper::{ElementRef, Html, Node};

use crate::config::{
    ALLOWED_RICH_TEXT_TAGS, ALLOWED_URL_SCHEMES, DROPPED_SUBTREE_TAGS, VOID_TAGS,
};
use crate::utils::markup::escape_html;

/// Nesting below this depth is flattened to escaped text.
const MAX_MARKUP_DEPTH: usize = 128;

/// Removes every tag and returns the trimmed text content.
///
/// `<script>` and `<style>` contents (and the other dropped subtrees) are
/// removed along with their tags. Character references are decoded.
///
/// # Arguments
///
/// * `input` - HTML or plain text
///
/// # Returns
///
/// The text content, trimmed of surrounding whitespace.
pub fn strip_all_tags(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    // Fast path: nothing that could be markup or an entity
    if !input.contains('<') && !input.contains('&') {
        return input.trim().to_string();
    }

    let fragment = Html::parse_fragment(input);
    let mut text = String::with_capacity(input.len());
    // Explicit stack in document order; dropped subtrees are never entered
    let mut pending: Vec<_> = fragment.root_element().children().rev().collect();
    while let Some(node) = pending.pop() {
        match node.value() {
            Node::Text(chunk) => text.push_str(chunk),
            Node::Element(element) if DROPPED_SUBTREE_TAGS.contains(&element.name()) => {}
            Node::Element(_) => pending.extend(node.children().rev()),
            _ => {}
        }
    }
    text.trim().to_string()
}

/// Sanitizes a single-line plain-text field.
///
/// Strips all markup and collapses every whitespace run, line breaks and tabs
/// included, to one space.
pub fn sanitize_text_field(input: &str) -> String {
    strip_all_tags(input)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sanitizes a multi-line plain-text field.
///
/// Like [`sanitize_text_field`] but line breaks survive; trailing whitespace on
/// each line is removed.
pub fn sanitize_textarea_field(input: &str) -> String {
    let stripped = strip_all_tags(input).replace("\r\n", "\n");
    stripped
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Sanitizes rich text down to the allowlisted markup.
///
/// - Allowed tags keep only their allowlisted attributes
/// - Other tags are unwrapped: the tag goes, its children stay
/// - Script-like elements are removed together with their content
/// - Event handler attributes and unsafe URL schemes are dropped
/// - Comments are dropped
///
/// # Returns
///
/// Re-serialized, escaped markup, trimmed. Empty when nothing survives.
pub fn sanitize_rich_text(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(input);
    let mut out = String::with_capacity(input.len());
    write_allowed_children(fragment.root_element(), &mut out, 0);
    out.trim().to_string()
}

fn write_allowed_children(element: ElementRef<'_>, out: &mut String, depth: usize) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(el) => {
                let name = el.name();
                if DROPPED_SUBTREE_TAGS.contains(&name) {
                    continue;
                }
                let Some(child_element) = ElementRef::wrap(child) else {
                    continue;
                };
                if depth >= MAX_MARKUP_DEPTH {
                    let text: String = child_element.text().collect();
                    out.push_str(&escape_html(&text));
                    continue;
                }

                match allowed_attributes(name) {
                    Some(allowed) => {
                        out.push('<');
                        out.push_str(name);
                        for (attr, value) in el.attrs() {
                            if allowed.contains(&attr) && is_safe_attribute(attr, value) {
                                out.push(' ');
                                out.push_str(attr);
                                out.push_str("=\"");
                                out.push_str(&escape_html(value));
                                out.push('"');
                            }
                        }
                        out.push('>');
                        if VOID_TAGS.contains(&name) {
                            continue;
                        }
                        write_allowed_children(child_element, out, depth + 1);
                        out.push_str("</");
                        out.push_str(name);
                        out.push('>');
                    }
                    None => write_allowed_children(child_element, out, depth + 1),
                }
            }
            _ => {}
        }
    }
}

fn allowed_attributes(tag: &str) -> Option<&'static [&'static str]> {
    ALLOWED_RICH_TEXT_TAGS
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, attrs)| *attrs)
}

fn is_safe_attribute(attr: &str, value: &str) -> bool {
    if attr.starts_with("on") {
        return false;
    }
    match attr {
        "href" | "src" | "cite" => is_safe_url(value),
        _ => true,
    }
}

/// Accepts relative URLs and absolute URLs with an allowlisted scheme.
fn is_safe_url(value: &str) -> bool {
    match url::Url::parse(value.trim()) {
        Ok(parsed) => ALLOWED_URL_SCHEMES.contains(&parsed.scheme()),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_all_tags_removes_markup() {
        assert_eq!(strip_all_tags("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_strip_all_tags_drops_script_content() {
        let input = "Before<script>alert('x')</script> after<style>p{}</style>";
        assert_eq!(strip_all_tags(input), "Before after");
    }

    #[test]
    fn test_strip_all_tags_skips_nested_dropped_subtrees() {
        let input = "<div><p>Keep <span>this<script><b>not</b> this</script></span></p></div> end";
        assert_eq!(strip_all_tags(input), "Keep this end");
    }

    #[test]
    fn test_strip_all_tags_deep_nesting() {
        let depth = 2_000;
        let input = format!("{}deep text{}", "<span>".repeat(depth), "</span>".repeat(depth));
        assert_eq!(strip_all_tags(&input), "deep text");

        let hidden = format!("<style>{}x{}</style>visible", "<b>".repeat(depth), "</b>".repeat(depth));
        assert_eq!(strip_all_tags(&hidden), "visible");
    }

    #[test]
    fn test_strip_all_tags_decodes_entities() {
        assert_eq!(strip_all_tags("Fish &amp; chips"), "Fish & chips");
    }

    #[test]
    fn test_strip_all_tags_plain_text_is_trimmed() {
        assert_eq!(strip_all_tags("  plain text \n"), "plain text");
        assert_eq!(strip_all_tags(""), "");
    }

    #[test]
    fn test_sanitize_text_field_collapses_whitespace() {
        assert_eq!(
            sanitize_text_field("  What\n is\t<em>this</em>?  "),
            "What is this?"
        );
    }

    #[test]
    fn test_sanitize_textarea_field_keeps_lines() {
        assert_eq!(
            sanitize_textarea_field("First line   \r\n<b>Second</b> line\n"),
            "First line\nSecond line"
        );
    }

    #[test]
    fn test_sanitize_rich_text_keeps_allowed_markup() {
        assert_eq!(
            sanitize_rich_text("<p>Hello <strong>world</strong></p>"),
            "<p>Hello <strong>world</strong></p>"
        );
    }

    #[test]
    fn test_sanitize_rich_text_drops_script() {
        assert_eq!(
            sanitize_rich_text("<p>Safe</p><script>alert(1)</script>"),
            "<p>Safe</p>"
        );
    }

    #[test]
    fn test_sanitize_rich_text_drops_event_handlers() {
        assert_eq!(
            sanitize_rich_text(r#"<p onclick="steal()" class="note">Hi</p>"#),
            r#"<p class="note">Hi</p>"#
        );
    }

    #[test]
    fn test_sanitize_rich_text_drops_javascript_links() {
        assert_eq!(
            sanitize_rich_text(r#"<a href="javascript:alert(1)">x</a>"#),
            "<a>x</a>"
        );
        assert_eq!(
            sanitize_rich_text(r#"<a href="https://example.com/a">x</a>"#),
            r#"<a href="https://example.com/a">x</a>"#
        );
        assert_eq!(
            sanitize_rich_text(r#"<a href="/docs">x</a>"#),
            r#"<a href="/docs">x</a>"#
        );
    }

    #[test]
    fn test_sanitize_rich_text_unwraps_unknown_tags() {
        assert_eq!(
            sanitize_rich_text("<section><em>kept</em></section>"),
            "<em>kept</em>"
        );
    }

    #[test]
    fn test_sanitize_rich_text_void_elements() {
        assert_eq!(sanitize_rich_text("a<br>b"), "a<br>b");
    }

    #[test]
    fn test_sanitize_rich_text_escapes_text() {
        assert_eq!(sanitize_rich_text("1 &lt; 2"), "1 &lt; 2");
        assert_eq!(sanitize_rich_text("   "), "");
    }
}
