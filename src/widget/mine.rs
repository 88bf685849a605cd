//! Depth-first FAQ extraction from a widget tree.

use serde_json::Value;

use crate::config::{DEFAULT_MAX_WIDGET_DEPTH, MAX_WIDGET_DEPTH_LIMIT};
use crate::error_handling::{InfoType, ProcessingStats, WarningType};
use crate::models::FaqItem;
use crate::utils::{sanitize_rich_text, strip_all_tags};
use crate::widget::decode::decode_layout;
use crate::widget::node::{child_elements, classify, Tab, WidgetKind};

/// Walks page-builder layouts and collects accordion content as FAQ items.
///
/// Traversal is iterative, so hostile nesting cannot exhaust the stack; nodes
/// deeper than `max_depth` are skipped and counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetMiner {
    max_depth: usize,
}

impl Default for WidgetMiner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WIDGET_DEPTH)
    }
}

impl WidgetMiner {
    /// Creates a miner that visits at most `max_depth` levels, clamped to
    /// `1..=MAX_WIDGET_DEPTH_LIMIT` so every visited level also decodes.
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.clamp(1, MAX_WIDGET_DEPTH_LIMIT),
        }
    }

    /// Deepest level this miner visits; roots are level zero.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Mines a serialized layout.
    ///
    /// Input that is not JSON, or nests too deeply to decode, yields an empty
    /// list.
    pub fn mine_str(&self, raw: &str, stats: &ProcessingStats) -> Vec<FaqItem> {
        match decode_layout(raw) {
            Ok(tree) => self.mine_value(&tree, stats, false),
            Err(e) => {
                log::warn!("Widget tree could not be decoded, no FAQ items mined: {}", e);
                stats.increment_warning(WarningType::UndecodableWidgetTree);
                Vec::new()
            }
        }
    }

    /// Mines a decoded layout: a list of root nodes or a single node.
    ///
    /// A JSON string holding an encoded layout is decoded once.
    ///
    /// # Returns
    ///
    /// FAQ items in document order (pre-order: a widget's own items come before
    /// those of widgets nested inside it). Never fails; unusable input gives an
    /// empty list.
    pub fn mine(&self, tree: &Value, stats: &ProcessingStats) -> Vec<FaqItem> {
        self.mine_value(tree, stats, true)
    }

    fn mine_value(&self, tree: &Value, stats: &ProcessingStats, decode_strings: bool) -> Vec<FaqItem> {
        let roots: &[Value] = match tree {
            Value::Array(nodes) => nodes.as_slice(),
            Value::Object(_) => std::slice::from_ref(tree),
            Value::String(raw) if decode_strings => return self.mine_str(raw, stats),
            Value::Null => return Vec::new(),
            _ => {
                log::warn!("Widget tree is neither a node nor a list of nodes");
                stats.increment_warning(WarningType::UndecodableWidgetTree);
                return Vec::new();
            }
        };

        let mut items = Vec::new();
        let mut stack: Vec<(&Value, usize)> = roots.iter().rev().map(|node| (node, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            if depth >= self.max_depth {
                log::warn!(
                    "Widget tree deeper than {} levels, skipping nested subtree",
                    self.max_depth
                );
                stats.increment_warning(WarningType::WidgetDepthLimit);
                continue;
            }

            collect_items(classify(node), &mut items, stats);

            for child in child_elements(node).iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        log::debug!("Mined {} FAQ items from widget tree", items.len());
        items
    }
}

fn collect_items(kind: WidgetKind<'_>, items: &mut Vec<FaqItem>, stats: &ProcessingStats) {
    match kind {
        WidgetKind::NestedAccordion { titles, contents } => {
            for (index, title) in titles.into_iter().enumerate() {
                // Positional pairing: missing bodies become empty answers
                let content = contents.get(index).copied().unwrap_or("");
                push_item(title, content, items, stats);
            }
        }
        WidgetKind::Accordion { tabs } | WidgetKind::Toggle { tabs } => {
            for Tab { title, content } in tabs {
                push_item(title, content, items, stats);
            }
        }
        WidgetKind::Malformed { widget_type } => {
            log::debug!("Skipping '{}' widget without item list", widget_type);
            stats.increment_warning(WarningType::MalformedWidget);
        }
        WidgetKind::Unrecognized => {}
    }
}

fn push_item(title: &str, content: &str, items: &mut Vec<FaqItem>, stats: &ProcessingStats) {
    let question = strip_all_tags(title);
    if question.is_empty() {
        stats.increment_warning(WarningType::EmptyWidgetTitle);
        return;
    }
    stats.increment_info(InfoType::WidgetItemMined);
    items.push(FaqItem {
        question,
        answer: sanitize_rich_text(content),
    });
}
