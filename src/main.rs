//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `faq_howto_schema` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use faq_howto_schema::config::Opt;
use faq_howto_schema::initialization::init_logger_with;
use faq_howto_schema::{run_page, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config: Config = Opt::parse().into();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format)
        .context("Failed to initialize logger")?;

    match run_page(&config) {
        Ok(report) => {
            // Summary goes to stderr so stdout stays a clean JSON document
            eprintln!(
                "Post {}: {} fragment{} ({}), {} main entit{}, {} warning{}",
                report.post_id,
                report.fragments,
                if report.fragments == 1 { "" } else { "s" },
                report.page_types.join(", "),
                report.main_entity_count,
                if report.main_entity_count == 1 { "y" } else { "ies" },
                report.warnings,
                if report.warnings == 1 { "" } else { "s" },
            );
            if let Some(path) = &report.output {
                eprintln!("Output written to {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("faq_howto_schema error: {:#}", e);
            process::exit(1);
        }
    }
}
