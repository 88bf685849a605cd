//! Page output document.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Standalone FAQPage and HowTo documents for hosts without a graph.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StandaloneDocuments {
    /// `FAQPage` document, absent when no question was emitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<Value>,
    /// `HowTo` document, absent without retained steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub howto: Option<Value>,
}

/// Shortcode markup for the page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderedMarkup {
    /// FAQ shortcode output.
    pub faq: String,
    /// HowTo shortcode output.
    pub howto: String,
}

/// What a page run writes out.
#[derive(Debug, Clone, Serialize)]
pub struct PageOutput {
    /// The page's `@graph` document.
    pub graph: Value,
    /// Present with `--standalone`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standalone: Option<StandaloneDocuments>,
    /// Present with `--render-markup`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<RenderedMarkup>,
}

impl PageOutput {
    /// Serializes the output, indented when `pretty` is set.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.context("Failed to serialize page output")
    }
}

/// Writes `contents` plus a trailing newline to `path`, or to stdout.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{}\n", contents))
            .with_context(|| format!("Failed to write output file {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", contents).context("Failed to write output to stdout")
        }
    }
}
