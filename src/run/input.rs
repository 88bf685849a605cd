//! Page input document.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::Value;

use crate::error_handling::InputError;
use crate::schema::PageContext;
use crate::store::PostId;

/// Everything the host knows about one page render.
///
/// `faq` and `howto` are raw form submissions; `widget_tree` is the stored
/// page-builder layout, decoded or as its JSON-encoded string. The layout is
/// kept as raw text here because layouts nest deeper than the document parser
/// allows; it is decoded separately when the page is built.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageInput {
    /// Content item the submissions belong to.
    #[serde(alias = "postId")]
    pub post_id: PostId,
    /// Page being rendered.
    pub page: PageContext,
    /// Raw FAQ form submission.
    pub faq: Value,
    /// Whether the FAQ comes from the widget tree instead of `faq`.
    #[serde(alias = "faqUseExternalSource")]
    pub faq_use_external_source: bool,
    /// Stored page-builder layout, undecoded.
    #[serde(alias = "widgetTree")]
    pub widget_tree: Option<Box<RawValue>>,
    /// Raw HowTo form submission.
    pub howto: Value,
}

impl PageInput {
    /// Parses a page input document.
    pub fn from_json(raw: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Reads the page input from `path`, or from stdin when `path` is `-`.
pub fn read_page_input(path: &Path) -> Result<PageInput, InputError> {
    let raw = if path.as_os_str() == "-" {
        log::info!("Reading page input from stdin");
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    PageInput::from_json(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_camel_case_keys() {
        let input = PageInput::from_json(
            r#"{"postId": 12, "faqUseExternalSource": true, "widgetTree": "[]",
                "page": {"canonicalUrl": "https://x.test/"}}"#,
        )
        .unwrap();
        assert_eq!(input.post_id, 12);
        assert!(input.faq_use_external_source);
        assert_eq!(input.widget_tree.as_deref().map(RawValue::get), Some(r#""[]""#));
        assert_eq!(input.page.canonical, "https://x.test/");
        assert!(input.faq.is_null());
    }

    #[test]
    fn test_null_widget_tree_is_absent() {
        let input = PageInput::from_json(r#"{"widget_tree": null}"#).unwrap();
        assert!(input.widget_tree.is_none());
    }

    #[test]
    fn test_deep_widget_tree_does_not_fail_the_document() {
        let layout = format!("{}{}", "[".repeat(400), "]".repeat(400));
        let input = PageInput::from_json(&format!(r#"{{"post_id": 3, "widget_tree": {}}}"#, layout))
            .unwrap();
        assert_eq!(input.post_id, 3);
        assert_eq!(input.widget_tree.as_deref().map(RawValue::get), Some(layout.as_str()));
    }

    #[test]
    fn test_invalid_json_is_an_input_error() {
        assert!(matches!(
            PageInput::from_json("{not json"),
            Err(InputError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(read_page_input(&missing), Err(InputError::Io(_))));
    }
}
