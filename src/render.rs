//! Human-readable FAQ and HowTo markup with schema.org microdata.
//!
//! Output carries the same data the JSON-LD pieces do. Questions are selected
//! with [`FaqItem::has_question`] and steps with `HowToData::retained_steps`,
//! the same predicates the compiler uses.

use crate::config::WIDGET_SOURCE_MARKER;
use crate::duration::format_duration;
use crate::error_handling::ProcessingStats;
use crate::models::{FaqItem, HowToData};
use crate::store::{resolve_faq_items, ContentStore, PostId};
use crate::utils::{autop, escape_html, sanitize_rich_text};
use crate::widget::WidgetMiner;

/// FAQ list markup. Items without a question are skipped; the answer block is
/// omitted when the answer is empty.
///
/// Returns an empty string when `items` is empty.
pub fn render_faq(items: &[FaqItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"easy-faq-container\">\n");
    for item in items.iter().filter(|item| item.has_question()) {
        html.push_str(
            "<div class=\"easy-faq-item\" itemscope itemprop=\"mainEntity\" itemtype=\"https://schema.org/Question\">\n",
        );
        html.push_str(&format!(
            "<h3 class=\"easy-faq-question\" itemprop=\"name\">{}</h3>\n",
            escape_html(&item.question)
        ));
        if item.has_answer() {
            html.push_str(&format!(
                "<div class=\"easy-faq-answer\" itemscope itemprop=\"acceptedAnswer\" itemtype=\"https://schema.org/Answer\">\n<div itemprop=\"text\">{}</div>\n</div>\n",
                autop(&sanitize_rich_text(&item.answer))
            ));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
    html
}

/// HowTo markup: optional title and description, the total time both as a
/// `totalTime` meta value and as human text, then the ordered steps.
pub fn render_howto(data: &HowToData) -> String {
    let mut html = String::from(
        "<div class=\"easy-howto-container\" itemscope itemtype=\"https://schema.org/HowTo\">\n",
    );

    if !data.name.is_empty() {
        html.push_str(&format!(
            "<h2 class=\"easy-howto-title\" itemprop=\"name\">{}</h2>\n",
            escape_html(&data.name)
        ));
    }
    if !data.description.is_empty() {
        html.push_str(&format!(
            "<div class=\"easy-howto-description\" itemprop=\"description\">\n{}\n</div>\n",
            autop(&escape_html(&data.description))
        ));
    }
    if !data.total_time.is_empty() {
        html.push_str(&format!(
            "<meta itemprop=\"totalTime\" content=\"{}\">\n<p class=\"easy-howto-time\"><strong>Total Time:</strong> {}</p>\n",
            escape_html(&data.total_time),
            escape_html(&format_duration(&data.total_time))
        ));
    }

    if !data.steps.is_empty() {
        html.push_str("<ol class=\"easy-howto-steps\">\n");
        for step in data.retained_steps() {
            html.push_str(
                "<li class=\"easy-howto-step\" itemprop=\"step\" itemscope itemtype=\"https://schema.org/HowToStep\">\n",
            );
            if !step.name.is_empty() {
                html.push_str(&format!(
                    "<h4 class=\"easy-howto-step-name\" itemprop=\"name\">{}</h4>\n",
                    escape_html(&step.name)
                ));
            }
            if !step.text.is_empty() {
                html.push_str(&format!(
                    "<div class=\"easy-howto-step-text\" itemprop=\"text\">\n{}\n</div>\n",
                    autop(&sanitize_rich_text(&step.text))
                ));
            }
            html.push_str("</li>\n");
        }
        html.push_str("</ol>\n");
    }

    html.push_str("</div>\n");
    html
}

/// Markup for the FAQ shortcode of a post.
///
/// When the post takes its FAQ from the page-builder layout the accordion is
/// already on the page, so only a marker comment is returned.
pub fn faq_shortcode<S: ContentStore + ?Sized>(
    store: &S,
    post_id: PostId,
    miner: &WidgetMiner,
    stats: &ProcessingStats,
) -> String {
    if store.faq_uses_widget_tree(post_id) {
        return WIDGET_SOURCE_MARKER.to_string();
    }
    render_faq(&resolve_faq_items(store, post_id, miner, stats))
}

/// Markup for the HowTo shortcode of a post; empty without stored data.
pub fn howto_shortcode<S: ContentStore + ?Sized>(store: &S, post_id: PostId) -> String {
    store.howto(post_id).map(render_howto).unwrap_or_default()
}
