//! Page pipeline.
//!
//! Reads one page input, persists the normalized submissions, assembles the
//! page's JSON-LD graph and writes it out:
//! 1. Normalize the raw FAQ and HowTo submissions into the content store
//! 2. Resolve the FAQ source (stored list or mined widget tree)
//! 3. Run the graph pieces against the page context
//! 4. Serialize the graph (plus standalone documents and markup on request)

mod input;
mod output;

pub use input::{read_page_input, PageInput};
pub use output::{write_output, PageOutput, RenderedMarkup, StandaloneDocuments};

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use serde_json::value::RawValue;
use serde_json::Value;

use crate::config::Config;
use crate::error_handling::ProcessingStats;
use crate::graph::{assemble_graph, FaqPiece, GraphPiece, HowToPiece};
use crate::initialization::init_miner;
use crate::normalize::{normalize_faq, normalize_howto};
use crate::render::{faq_shortcode, howto_shortcode};
use crate::schema::{faq_page_document, graph_document, howto_document};
use crate::store::{resolve_faq_items, ContentStore, MemoryStore, PostId};
use crate::widget::{decode_layout, WidgetMiner};

/// Results of a page run.
#[derive(Debug, Clone)]
pub struct PageReport {
    /// Content item the page belongs to
    pub post_id: PostId,
    /// Number of fragments added to the graph (page node excluded)
    pub fragments: usize,
    /// Page types after registration
    pub page_types: Vec<String>,
    /// Number of main entity references set on the page
    pub main_entity_count: usize,
    /// Degraded-input warnings counted during the run
    pub warnings: usize,
    /// Output file, `None` when written to stdout
    pub output: Option<PathBuf>,
}

/// Runs the page pipeline with the provided configuration.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input cannot be read
/// or decoded, or the output cannot be written. Degraded data inside a valid
/// input never fails the run; it is counted in the warnings instead.
pub fn run_page(config: &Config) -> Result<PageReport> {
    config.validate().context("Invalid configuration")?;

    let input = read_page_input(&config.input).with_context(|| {
        format!("Failed to load page input from {}", config.input.display())
    })?;
    let stats = ProcessingStats::new();
    let miner = init_miner(config);

    let (output, report) = build_page(input, config, &miner, &stats);
    let json = output.to_json(config.pretty)?;
    write_output(config.output.as_deref(), &json)?;

    stats.log_summary();
    info!(
        "Built page graph for post {}: {} fragments, types [{}]",
        report.post_id,
        report.fragments,
        report.page_types.join(", ")
    );

    Ok(PageReport {
        warnings: stats.total_warnings(),
        output: config.output.clone(),
        ..report
    })
}

/// Builds the output document for one page without touching the filesystem.
pub fn build_page(
    input: PageInput,
    config: &Config,
    miner: &WidgetMiner,
    stats: &ProcessingStats,
) -> (PageOutput, PageReport) {
    let PageInput {
        post_id,
        page: mut ctx,
        faq,
        faq_use_external_source,
        widget_tree,
        howto,
    } = input;

    let mut store = MemoryStore::new();
    store.save_faq(post_id, normalize_faq(&faq, stats));
    store.save_howto(post_id, normalize_howto(&howto, stats));
    store.set_faq_use_widget_tree(post_id, faq_use_external_source);
    if let Some(raw) = widget_tree {
        store.set_widget_tree(post_id, layout_value(&raw));
    }

    let faq_items = resolve_faq_items(&store, post_id, miner, stats);
    let howto_data = store.howto(post_id).cloned();

    let standalone = config.standalone.then(|| StandaloneDocuments {
        faq: faq_page_document(&faq_items, &ctx.canonical),
        howto: howto_data
            .as_ref()
            .and_then(|data| howto_document(data, &ctx.canonical)),
    });
    let markup = config.render_markup.then(|| RenderedMarkup {
        faq: faq_shortcode(&store, post_id, miner, stats),
        howto: howto_shortcode(&store, post_id),
    });

    let faq_piece = FaqPiece::new(faq_items, stats);
    let howto_piece = HowToPiece::new(howto_data, stats);
    let pieces: [&dyn GraphPiece; 2] = [&faq_piece, &howto_piece];
    let fragments = assemble_graph(&pieces, &mut ctx);

    let report = PageReport {
        post_id,
        fragments: fragments.len(),
        page_types: ctx.schema_page_type.clone(),
        main_entity_count: ctx.main_entity_of_page.len(),
        warnings: stats.total_warnings(),
        output: None,
    };
    let output = PageOutput {
        graph: graph_document(&ctx, &fragments),
        standalone,
        markup,
    };
    (output, report)
}

/// Decodes a stored layout for the content store.
///
/// A layout too deep to decode is kept as its encoded text; the miner reports
/// it if the page actually reads its FAQ from the widget tree.
fn layout_value(raw: &RawValue) -> Value {
    decode_layout(raw.get()).unwrap_or_else(|_| Value::String(raw.get().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::WarningType;
    use serde_json::json;

    fn input(value: serde_json::Value) -> PageInput {
        PageInput::from_json(&value.to_string()).unwrap()
    }

    fn deep_layout_page(levels: usize) -> PageInput {
        let accordion =
            r#"{"widgetType":"accordion","settings":{"tabs":[{"tab_title":"Deep","tab_content":"Yes"}]}}"#;
        let layout = format!(
            "[{}{}{}]",
            r#"{"elType":"container","elements":["#.repeat(levels),
            accordion,
            "]}".repeat(levels)
        );
        PageInput::from_json(&format!(
            r#"{{"post_id": 9, "page": {{"canonical": "https://x.test/deep"}},
                "faq_use_external_source": true, "widget_tree": {}}}"#,
            layout
        ))
        .unwrap()
    }

    #[test]
    fn test_build_page_from_stored_submission() {
        let stats = ProcessingStats::new();
        let page = input(json!({
            "post_id": 5,
            "page": {"canonical": "https://x.test/p", "main_schema_id": "https://x.test/p#webpage"},
            "faq": {
                "0": {"question": "Q1", "answer": "A1"},
                "1": {"question": "", "answer": ""},
                "2": {"question": "Q2", "answer": ""}
            },
            "howto": {"name": "H", "steps": [{"name": "S1", "text": ""}]}
        }));
        let (output, report) = build_page(page, &Config::default(), &WidgetMiner::default(), &stats);

        assert_eq!(report.fragments, 3);
        assert_eq!(report.page_types, vec!["WebPage", "FAQPage"]);
        assert_eq!(report.main_entity_count, 1);
        assert_eq!(report.warnings, 1);
        assert_eq!(output.graph["@graph"].as_array().unwrap().len(), 4);
        assert!(output.standalone.is_none());
        assert!(output.markup.is_none());
    }

    #[test]
    fn test_build_page_mines_widget_tree_and_renders() {
        let stats = ProcessingStats::new();
        let layout = json!([{"widgetType": "toggle", "settings": {"tabs": [
            {"tab_title": "From layout", "tab_content": "Yes"}
        ]}}]);
        let page = input(json!({
            "post_id": 6,
            "page": {"canonical": "https://x.test/q"},
            "faq": [{"question": "Stored", "answer": "ignored"}],
            "faq_use_external_source": true,
            "widget_tree": layout.to_string()
        }));
        let config = Config {
            standalone: true,
            render_markup: true,
            ..Default::default()
        };
        let (output, report) = build_page(page, &config, &WidgetMiner::default(), &stats);

        assert_eq!(report.fragments, 1);
        assert_eq!(output.graph["@graph"][1]["name"], "From layout");
        let standalone = output.standalone.unwrap();
        assert_eq!(standalone.faq.unwrap()["mainEntity"][0]["name"], "From layout");
        assert!(standalone.howto.is_none());
        let markup = output.markup.unwrap();
        assert_eq!(markup.faq, crate::config::WIDGET_SOURCE_MARKER);
        assert_eq!(markup.howto, "");
    }

    #[test]
    fn test_build_page_mines_layout_deeper_than_json_default() {
        let stats = ProcessingStats::new();
        let (output, report) = build_page(
            deep_layout_page(80),
            &Config::default(),
            &WidgetMiner::new(100),
            &stats,
        );
        assert_eq!(report.fragments, 1);
        assert_eq!(report.warnings, 0);
        assert_eq!(output.graph["@graph"][1]["name"], "Deep");
    }

    #[test]
    fn test_build_page_undecodable_layout_is_a_warning() {
        let stats = ProcessingStats::new();
        let levels = crate::config::MAX_WIDGET_DEPTH_LIMIT + 20;
        let (output, report) = build_page(
            deep_layout_page(levels),
            &Config::default(),
            &WidgetMiner::new(crate::config::MAX_WIDGET_DEPTH_LIMIT),
            &stats,
        );
        assert_eq!(report.fragments, 0);
        assert_eq!(stats.get_warning_count(WarningType::UndecodableWidgetTree), 1);
        assert_eq!(output.graph["@graph"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_archive_page_gets_only_page_node() {
        let stats = ProcessingStats::new();
        let page = input(json!({
            "page": {"canonical": "https://x.test/archive", "is_singular": false},
            "faq": [{"question": "Q", "answer": "A"}]
        }));
        let (output, report) = build_page(page, &Config::default(), &WidgetMiner::default(), &stats);
        assert_eq!(report.fragments, 0);
        assert_eq!(report.page_types, vec!["WebPage"]);
        assert_eq!(output.graph["@graph"].as_array().unwrap().len(), 1);
    }
}
