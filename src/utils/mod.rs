//! Utility functions for author input.
//!
//! This module provides:
//! - Plain-text and rich-text sanitization
//! - HTML escaping and paragraph formatting for rendered markup

pub mod markup;
pub mod sanitize;

pub use markup::{autop, escape_html};
pub use sanitize::{
    sanitize_rich_text, sanitize_text_field, sanitize_textarea_field, strip_all_tags,
};

use regex::Regex;

/// Returns a regex that matches nothing, used when a static pattern fails to
/// compile.
///
/// # Panics
///
/// Panics if the fallback pattern itself cannot be compiled (programming error).
pub(crate) fn never_matching_regex() -> Regex {
    Regex::new(r"[^\s\S]")
        .expect("Fallback regex '[^\\s\\S]' should always compile - this is a programming error")
}
