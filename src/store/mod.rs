//! Content store boundary.
//!
//! The compiler never reads persisted data itself; the host resolves a post's
//! collections through [`ContentStore`] before compilation starts.

mod memory;

// Re-export public API
pub use memory::{MemoryStore, SaveOutcome};

use serde_json::Value;

use crate::error_handling::ProcessingStats;
use crate::models::{FaqItem, HowToData};
use crate::widget::WidgetMiner;

/// Content item identifier.
pub type PostId = u64;

/// Read side of the content store.
pub trait ContentStore {
    /// Stored FAQ items, empty when none were saved.
    fn faq_items(&self, post_id: PostId) -> &[FaqItem];

    /// Whether FAQ items come from the page-builder layout instead.
    fn faq_uses_widget_tree(&self, post_id: PostId) -> bool;

    /// Stored page-builder layout, decoded or as an encoded string.
    fn widget_tree(&self, post_id: PostId) -> Option<&Value>;

    /// Stored HowTo record.
    fn howto(&self, post_id: PostId) -> Option<&HowToData>;
}

/// The FAQ items to compile or render for a post.
///
/// With the widget-tree flag set the stored list is ignored entirely and the
/// layout is mined; a missing layout gives no items.
pub fn resolve_faq_items<S: ContentStore + ?Sized>(
    store: &S,
    post_id: PostId,
    miner: &WidgetMiner,
    stats: &ProcessingStats,
) -> Vec<FaqItem> {
    if store.faq_uses_widget_tree(post_id) {
        return match store.widget_tree(post_id) {
            Some(tree) => miner.mine(tree, stats),
            None => {
                log::debug!("Post {} uses the widget tree but has none stored", post_id);
                Vec::new()
            }
        };
    }
    store.faq_items(post_id).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Normalized;
    use serde_json::json;

    fn accordion(title: &str) -> Value {
        json!([{"widgetType": "accordion", "settings": {"tabs": [
            {"tab_title": title, "tab_content": "from layout"}
        ]}}])
    }

    #[test]
    fn test_absent_deletes_previous_collection() {
        let mut store = MemoryStore::new();
        let saved = store.save_faq(7, Normalized::Present(vec![FaqItem::new("Q", "A")]));
        assert_eq!(saved, SaveOutcome::Stored);
        assert_eq!(store.faq_items(7).len(), 1);

        assert_eq!(store.save_faq(7, Normalized::Absent), SaveOutcome::Deleted);
        assert!(store.faq_items(7).is_empty());
    }

    #[test]
    fn test_howto_save_and_delete() {
        let mut store = MemoryStore::new();
        let data = HowToData {
            name: "X".into(),
            ..Default::default()
        };
        store.save_howto(1, Normalized::Present(data.clone()));
        assert_eq!(store.howto(1), Some(&data));
        store.save_howto(1, Normalized::Absent);
        assert_eq!(store.howto(1), None);
        assert_eq!(store.howto(2), None);
    }

    #[test]
    fn test_widget_tree_flag_suppresses_stored_items() {
        let stats = ProcessingStats::new();
        let miner = WidgetMiner::default();
        let mut store = MemoryStore::new();
        store.save_faq(3, Normalized::Present(vec![FaqItem::new("Stored", "A")]));
        store.set_widget_tree(3, accordion("Mined"));

        let items = resolve_faq_items(&store, 3, &miner, &stats);
        assert_eq!(items[0].question, "Stored");

        store.set_faq_use_widget_tree(3, true);
        let items = resolve_faq_items(&store, 3, &miner, &stats);
        assert_eq!(items, vec![FaqItem::new("Mined", "from layout")]);
    }

    #[test]
    fn test_widget_tree_flag_without_layout_yields_nothing() {
        let stats = ProcessingStats::new();
        let mut store = MemoryStore::new();
        store.save_faq(4, Normalized::Present(vec![FaqItem::new("Stored", "A")]));
        store.set_faq_use_widget_tree(4, true);
        assert!(resolve_faq_items(&store, 4, &WidgetMiner::default(), &stats).is_empty());
    }
}
