//! Typed view over page-builder widget nodes.
//!
//! The serialized layout is loosely typed: settings may be an object or an
//! empty list, children may be missing, titles may be absent. Each node is
//! classified into one of a few variants carrying only what the miner needs;
//! everything else is `Unrecognized` and only its children matter.

use serde_json::Value;

use crate::config::{ACCORDION_WIDGET, NESTED_ACCORDION_WIDGET, TEXT_EDITOR_WIDGET, TOGGLE_WIDGET};

/// One tab of a classic accordion or toggle widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab<'a> {
    /// Raw `tab_title`, empty when missing.
    pub title: &'a str,
    /// Raw `tab_content`, empty when missing.
    pub content: &'a str,
}

/// What a single widget node contributes to the FAQ list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind<'a> {
    /// Titles come from `settings.items`; bodies are the text-editor widgets
    /// two levels below, paired by position.
    NestedAccordion {
        /// `item_title` of each entry in `settings.items`.
        titles: Vec<&'a str>,
        /// Editor text of each panel, in panel order.
        contents: Vec<&'a str>,
    },
    /// `settings.tabs`, one item per tab.
    Accordion {
        /// Tabs in display order.
        tabs: Vec<Tab<'a>>,
    },
    /// Same shape as `Accordion`.
    Toggle {
        /// Tabs in display order.
        tabs: Vec<Tab<'a>>,
    },
    /// An accordion-shaped widget without its items/tabs list.
    Malformed {
        /// The node's `widgetType`.
        widget_type: &'a str,
    },
    /// Containers, columns and every other widget.
    Unrecognized,
}

/// Classifies a node by its `widgetType` tag.
pub fn classify(node: &Value) -> WidgetKind<'_> {
    let Some(widget_type) = widget_type(node) else {
        return WidgetKind::Unrecognized;
    };

    match widget_type {
        NESTED_ACCORDION_WIDGET => match setting_list(node, "items") {
            Some(items) => WidgetKind::NestedAccordion {
                titles: items.iter().map(|item| str_field(item, "item_title")).collect(),
                contents: nested_text_contents(node),
            },
            None => WidgetKind::Malformed { widget_type },
        },
        ACCORDION_WIDGET | TOGGLE_WIDGET => match setting_list(node, "tabs") {
            Some(tabs) => {
                let tabs = tabs
                    .iter()
                    .map(|tab| Tab {
                        title: str_field(tab, "tab_title"),
                        content: str_field(tab, "tab_content"),
                    })
                    .collect();
                if widget_type == ACCORDION_WIDGET {
                    WidgetKind::Accordion { tabs }
                } else {
                    WidgetKind::Toggle { tabs }
                }
            }
            None => WidgetKind::Malformed { widget_type },
        },
        _ => WidgetKind::Unrecognized,
    }
}

/// The node's `elements` list, or an empty slice.
pub fn child_elements(node: &Value) -> &[Value] {
    node.get("elements")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn widget_type(node: &Value) -> Option<&str> {
    node.get("widgetType").and_then(Value::as_str)
}

fn setting_list<'a>(node: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    node.get("settings")
        .and_then(Value::as_object)
        .and_then(|settings| settings.get(key))
        .and_then(Value::as_array)
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Text-editor bodies found exactly two levels below the accordion, in
/// encounter order. A text-editor without an `editor` setting still takes its
/// slot so later bodies stay aligned with their titles.
fn nested_text_contents(node: &Value) -> Vec<&str> {
    child_elements(node)
        .iter()
        .flat_map(child_elements)
        .filter(|grandchild| widget_type(grandchild) == Some(TEXT_EDITOR_WIDGET))
        .map(|editor| {
            editor
                .get("settings")
                .map(|settings| str_field(settings, "editor"))
                .unwrap_or("")
        })
        .collect()
}
