//! Page-builder widget tree mining.
//!
//! Accordion-shaped widgets (`nested-accordion`, `accordion`, `toggle`) found
//! anywhere in a serialized layout are turned into the same [`FaqItem`] list an
//! author would enter by hand. Titles are stripped to plain text, bodies are
//! sanitized rich text.
//!
//! [`FaqItem`]: crate::models::FaqItem

mod decode;
mod mine;
mod node;

// Re-export public API
pub use decode::decode_layout;
pub use mine::WidgetMiner;
pub use node::{child_elements, classify, Tab, WidgetKind};

use serde_json::Value;

use crate::error_handling::ProcessingStats;
use crate::models::FaqItem;

/// Mines a decoded layout with the default depth limit.
pub fn mine_faq_items(tree: &Value, stats: &ProcessingStats) -> Vec<FaqItem> {
    WidgetMiner::default().mine(tree, stats)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
