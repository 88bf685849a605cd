//! HowTo submission normalization.

use serde_json::Value;

use crate::error_handling::{ProcessingStats, WarningType};
use crate::models::{HowToData, HowToStep};
use crate::normalize::{entries, text_field, Normalized};
use crate::utils::{sanitize_rich_text, sanitize_text_field, sanitize_textarea_field};

/// Normalizes a submitted HowTo record.
///
/// `name` and `totalTime` become single-line plain text, `description`
/// multi-line plain text, independently of the steps. Each step's `name` is
/// plain text and its `text` sanitized rich text; steps where both end up empty
/// are dropped, the rest keep submission order.
///
/// # Returns
///
/// `Normalized::Absent` when the record has neither a name nor a retained
/// step. A named record without steps is kept for the author but never
/// compiled.
pub fn normalize_howto(raw: &Value, stats: &ProcessingStats) -> Normalized<HowToData> {
    if raw.is_null() {
        return Normalized::Absent;
    }
    if !raw.is_object() {
        log::debug!("HowTo submission is not a mapping");
        stats.increment_warning(WarningType::MalformedSubmission);
        return Normalized::Absent;
    }

    let mut data = HowToData {
        name: sanitize_text_field(text_field(raw, &["name"])),
        description: sanitize_textarea_field(text_field(raw, &["description"])),
        total_time: sanitize_text_field(text_field(raw, &["total_time", "totalTime"])),
        steps: Vec::new(),
    };

    if let Some(submitted) = raw.get("steps").and_then(|steps| entries(steps, stats)) {
        for entry in submitted {
            if !entry.is_object() {
                stats.increment_warning(WarningType::MalformedSubmission);
                continue;
            }
            let step = HowToStep {
                name: sanitize_text_field(text_field(entry, &["name"])),
                text: sanitize_rich_text(text_field(entry, &["text"])),
            };
            if step.is_empty() {
                stats.increment_warning(WarningType::DroppedHowToStep);
                continue;
            }
            data.steps.push(step);
        }
    }

    log::debug!(
        "Normalized HowTo submission: {} steps retained",
        data.steps.len()
    );
    if data.name.is_empty() && data.steps.is_empty() {
        Normalized::Absent
    } else {
        Normalized::Present(data)
    }
}
