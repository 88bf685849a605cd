//! Application initialization.
//!
//! This module provides the setup the binary performs before building a page:
//! - Logger initialization (plain or JSON output)
//! - Widget miner construction from the configured traversal limit

mod logger;

// Re-export public API
pub use logger::init_logger_with;

use crate::config::Config;
use crate::widget::WidgetMiner;

/// Builds the widget miner used for every page of a run.
///
/// The miner is created once and passed by reference to the pieces and the
/// renderer that need it.
pub fn init_miner(config: &Config) -> WidgetMiner {
    WidgetMiner::new(config.max_widget_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_miner_uses_configured_depth() {
        let config = Config {
            max_widget_depth: 7,
            ..Default::default()
        };
        assert_eq!(init_miner(&config).max_depth(), 7);
    }
}
