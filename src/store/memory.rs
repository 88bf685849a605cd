//! In-memory content store.

use std::collections::HashMap;

use serde_json::Value;

use crate::models::{FaqItem, HowToData};
use crate::normalize::Normalized;
use crate::store::{ContentStore, PostId};

/// What a save did to the stored collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The collection was written.
    Stored,
    /// The collection was empty and any stored value removed.
    Deleted,
}

#[derive(Debug, Default, Clone)]
struct PostRecord {
    faq: Option<Vec<FaqItem>>,
    faq_use_widget_tree: bool,
    widget_tree: Option<Value>,
    howto: Option<HowToData>,
}

/// Per-post records kept in a map.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    posts: HashMap<PostId, PostRecord>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores normalized FAQ items, or deletes the stored list when absent.
    pub fn save_faq(&mut self, post_id: PostId, items: Normalized<Vec<FaqItem>>) -> SaveOutcome {
        let record = self.posts.entry(post_id).or_default();
        record.faq = items.into_option();
        outcome(record.faq.is_some(), "FAQ", post_id)
    }

    /// Stores a normalized HowTo record, or deletes it when absent.
    pub fn save_howto(&mut self, post_id: PostId, data: Normalized<HowToData>) -> SaveOutcome {
        let record = self.posts.entry(post_id).or_default();
        record.howto = data.into_option();
        outcome(record.howto.is_some(), "HowTo", post_id)
    }

    /// Sets whether the FAQ is read from the widget tree.
    pub fn set_faq_use_widget_tree(&mut self, post_id: PostId, enabled: bool) {
        self.posts.entry(post_id).or_default().faq_use_widget_tree = enabled;
    }

    /// Stores the page-builder layout as received (decoded JSON or an encoded string).
    pub fn set_widget_tree(&mut self, post_id: PostId, tree: Value) {
        self.posts.entry(post_id).or_default().widget_tree = Some(tree);
    }
}

fn outcome(stored: bool, collection: &str, post_id: PostId) -> SaveOutcome {
    if stored {
        log::debug!("Stored {} data for post {}", collection, post_id);
        SaveOutcome::Stored
    } else {
        log::debug!("Deleted {} data for post {}", collection, post_id);
        SaveOutcome::Deleted
    }
}

impl ContentStore for MemoryStore {
    fn faq_items(&self, post_id: PostId) -> &[FaqItem] {
        self.posts
            .get(&post_id)
            .and_then(|record| record.faq.as_deref())
            .unwrap_or(&[])
    }

    fn faq_uses_widget_tree(&self, post_id: PostId) -> bool {
        self.posts
            .get(&post_id)
            .is_some_and(|record| record.faq_use_widget_tree)
    }

    fn widget_tree(&self, post_id: PostId) -> Option<&Value> {
        self.posts.get(&post_id)?.widget_tree.as_ref()
    }

    fn howto(&self, post_id: PostId) -> Option<&HowToData> {
        self.posts.get(&post_id)?.howto.as_ref()
    }
}
