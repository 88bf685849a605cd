//! Markup helpers for the human-readable renderer.

use regex::Regex;
use std::sync::LazyLock;

static BLANK_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n[ \t]*\n").unwrap_or_else(|e| {
        log::error!("Failed to compile blank line regex: {}", e);
        crate::utils::never_matching_regex()
    })
});

/// Block-level openings that must not be wrapped in a paragraph.
const BLOCK_PREFIXES: &[&str] = &[
    "<p", "<ul", "<ol", "<div", "<h1", "<h2", "<h3", "<h4", "<h5", "<h6", "<blockquote", "<pre",
    "<table", "<figure", "<hr",
];

/// Escapes text for use in HTML content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Turns blank-line separated text into paragraphs.
///
/// Each block becomes a `<p>` unless it already starts with a block-level tag;
/// single newlines inside a paragraph become `<br />`.
pub fn autop(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    BLANK_LINE_RE
        .split(normalized.trim())
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            if BLOCK_PREFIXES.iter().any(|prefix| block.starts_with(prefix)) {
                block.to_string()
            } else {
                format!("<p>{}</p>", block.replace('\n', "<br />\n"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_autop_wraps_blocks() {
        assert_eq!(autop("One\n\nTwo"), "<p>One</p>\n<p>Two</p>");
    }

    #[test]
    fn test_autop_line_breaks() {
        assert_eq!(autop("One\nTwo"), "<p>One<br />\nTwo</p>");
    }

    #[test]
    fn test_autop_leaves_block_markup() {
        assert_eq!(autop("<ul><li>a</li></ul>\n\nText"), "<ul><li>a</li></ul>\n<p>Text</p>");
    }

    #[test]
    fn test_autop_empty() {
        assert_eq!(autop("  \n\n "), "");
    }
}
