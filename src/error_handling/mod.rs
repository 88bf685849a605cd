//! Error handling and processing statistics.
//!
//! This module provides:
//! - Edge error types for the binary (logger setup, page input decoding)
//! - Warning and info categories for degraded input
//! - Processing statistics tracking
//!
//! The compile core never returns errors. Input that does not fit the expected
//! shape is skipped and counted here instead:
//! - **Warnings**: data that was dropped (empty entries, malformed widgets)
//! - **Info**: notable events (mined items, compiled fragments)

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{InfoType, InitializationError, InputError, LayoutDecodeError, WarningType};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
        for info_type in InfoType::iter() {
            assert_eq!(stats.get_info_count(info_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_warning(WarningType::DroppedFaqEntry);
        assert_eq!(stats.get_warning_count(WarningType::DroppedFaqEntry), 1);

        stats.increment_info(InfoType::QuestionCompiled);
        assert_eq!(stats.get_info_count(InfoType::QuestionCompiled), 1);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_warning(WarningType::DroppedFaqEntry);
        stats.increment_warning(WarningType::WidgetDepthLimit);
        stats.increment_info(InfoType::HowToCompiled);

        assert_eq!(stats.total_warnings(), 2);
        assert_eq!(stats.total_info(), 1);
    }

    #[test]
    fn test_display_uses_descriptions() {
        assert_eq!(
            WarningType::UndecodableWidgetTree.to_string(),
            "Undecodable widget tree"
        );
        assert_eq!(
            InfoType::UnansweredQuestion.to_string(),
            "Question without answer"
        );
    }

    #[test]
    fn test_processing_stats_debug_lists_counters() {
        let stats = ProcessingStats::new();
        stats.increment_warning(WarningType::MalformedWidget);
        let rendered = format!("{:?}", stats);
        assert!(rendered.starts_with("ProcessingStats"));
        assert!(rendered.contains("MalformedWidget"));
    }

    #[test]
    fn test_layout_decode_error_messages() {
        let err = LayoutDecodeError::TooDeep {
            depth: 300,
            limit: 272,
        };
        assert_eq!(err.to_string(), "layout nests 300 levels deep, limit is 272");
    }

    #[test]
    fn test_input_error_wraps_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = InputError::from(json_err);
        assert!(err.to_string().starts_with("Invalid page input JSON"));
    }
}
