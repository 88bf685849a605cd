// Shared test helpers for page input fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// Canonical URL used by every fixture page.
#[allow(dead_code)] // Used by other test files
pub const PAGE_URL: &str = "https://example.com/guide/";

/// A nested-accordion widget with its text-editor bodies one container below.
#[allow(dead_code)] // Used by other test files
pub fn nested_accordion(titles: &[&str], bodies: &[&str]) -> Value {
    let items: Vec<Value> = titles.iter().map(|t| json!({"item_title": t})).collect();
    let panels: Vec<Value> = bodies
        .iter()
        .map(|b| {
            json!({
                "elType": "container",
                "elements": [{"elType": "widget", "widgetType": "text-editor", "settings": {"editor": b}}]
            })
        })
        .collect();
    json!({
        "elType": "widget",
        "widgetType": "nested-accordion",
        "settings": {"items": items},
        "elements": panels
    })
}

/// A page input document with a stored FAQ form submission and a HowTo.
#[allow(dead_code)] // Used by other test files
pub fn sample_page() -> Value {
    json!({
        "post_id": 42,
        "page": {
            "canonical": PAGE_URL,
            "main_schema_id": format!("{}#webpage", PAGE_URL),
            "schema_page_type": "WebPage"
        },
        "faq": {
            "0": {"question": "Q1", "answer": "<p>A1</p>"},
            "1": {"question": "", "answer": ""},
            "2": {"question": "Q2", "answer": ""}
        },
        "howto": {
            "name": "Repot a plant",
            "total_time": "PT1H30M",
            "steps": {
                "0": {"name": "Water", "text": "Water the day before."},
                "1": {"name": "", "text": ""},
                "2": {"name": "Lift", "text": "<p>Lift the root ball.</p>"}
            }
        }
    })
}

/// Writes `page` to `page.json` in a fresh temp directory.
///
/// Returns the directory (keep it alive) and the file path.
#[allow(dead_code)] // Used by other test files
pub fn write_page(page: &Value) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("page.json");
    std::fs::write(&path, page.to_string()).expect("Failed to write page input");
    (dir, path)
}
