//! FAQ submission normalization.

use serde_json::Value;

use crate::error_handling::{ProcessingStats, WarningType};
use crate::models::FaqItem;
use crate::normalize::{entries, text_field, Normalized};
use crate::utils::{sanitize_rich_text, sanitize_text_field};

/// Normalizes a submitted FAQ list.
///
/// Accepts the form's mapping of index → `{question, answer}` (kept in
/// submission order) or a plain list. The question becomes plain text, the
/// answer sanitized rich text; entries where both end up empty are dropped.
///
/// # Returns
///
/// `Normalized::Absent` when nothing is retained.
pub fn normalize_faq(raw: &Value, stats: &ProcessingStats) -> Normalized<Vec<FaqItem>> {
    let Some(submitted) = entries(raw, stats) else {
        return Normalized::Absent;
    };

    let mut items = Vec::with_capacity(submitted.len());
    for entry in submitted {
        if !entry.is_object() {
            log::debug!("Skipping FAQ entry that is not a mapping");
            stats.increment_warning(WarningType::MalformedSubmission);
            continue;
        }

        let question = sanitize_text_field(text_field(entry, &["question"]));
        let answer = sanitize_rich_text(text_field(entry, &["answer"]));
        if question.is_empty() && answer.is_empty() {
            stats.increment_warning(WarningType::DroppedFaqEntry);
            continue;
        }
        items.push(FaqItem { question, answer });
    }

    log::debug!("Normalized FAQ submission: {} items retained", items.len());
    if items.is_empty() {
        Normalized::Absent
    } else {
        Normalized::Present(items)
    }
}
