//! Normalization of author-submitted collections.
//!
//! Form submissions arrive as loosely keyed mappings. Normalization sanitizes
//! each field for its role (plain or rich text), drops entries that end up
//! empty and keeps submission order. The result tells the content store
//! whether to persist or delete.

mod faq;
mod howto;
mod types;

// Re-export public API
pub use faq::normalize_faq;
pub use howto::normalize_howto;
pub use types::Normalized;

use serde_json::Value;

use crate::error_handling::{ProcessingStats, WarningType};

/// Values of a submitted collection in submission order.
///
/// Mappings keep insertion order (`serde_json` is built with
/// `preserve_order`). `None` for null or scalar input.
fn entries<'a>(raw: &'a Value, stats: &ProcessingStats) -> Option<Vec<&'a Value>> {
    match raw {
        Value::Object(map) => Some(map.values().collect()),
        Value::Array(list) => Some(list.iter().collect()),
        Value::Null => None,
        _ => {
            log::debug!("Submitted collection is neither a mapping nor a list");
            stats.increment_warning(WarningType::MalformedSubmission);
            None
        }
    }
}

/// First string value found under one of `keys`, or `""`.
fn text_field<'a>(entry: &'a Value, keys: &[&str]) -> &'a str {
    keys.iter()
        .find_map(|key| entry.get(*key).and_then(Value::as_str))
        .unwrap_or("")
}
