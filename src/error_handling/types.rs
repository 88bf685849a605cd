//! Error type definitions.
//!
//! This module defines the edge errors of the binary and the warning/info
//! categories counted while mining, normalizing and compiling.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for reading the page input document.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input could not be read.
    #[error("Failed to read page input: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a valid page document.
    #[error("Invalid page input JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a serialized widget layout could not be turned into a tree.
#[derive(Error, Debug)]
pub enum LayoutDecodeError {
    /// Brackets nest deeper than the decoder accepts.
    #[error("layout nests {depth} levels deep, limit is {limit}")]
    TooDeep {
        /// Deepest bracket nesting found in the layout.
        depth: usize,
        /// Deepest nesting the decoder accepts.
        limit: usize,
    },

    /// The layout is not valid JSON.
    #[error("layout is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Degraded input that was skipped instead of failing the operation.
///
/// None of these stop compilation; they explain why a piece came out smaller
/// than the raw data suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// Widget tree is not JSON, nests too deeply to decode, or is not a node/list of nodes.
    UndecodableWidgetTree,
    /// Subtree below the configured depth was not visited.
    WidgetDepthLimit,
    /// Accordion-shaped widget missing its items/tabs list.
    MalformedWidget,
    /// Accordion item dropped because its title stripped to nothing.
    EmptyWidgetTitle,
    /// Submitted FAQ entry empty after sanitization.
    DroppedFaqEntry,
    /// Submitted HowTo step empty after sanitization.
    DroppedHowToStep,
    /// Submitted collection or entry is not a mapping/list.
    MalformedSubmission,
}

/// Informational metrics collected while building a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// Question/answer pair extracted from the widget tree.
    WidgetItemMined,
    /// Question fragment emitted.
    QuestionCompiled,
    /// HowTo fragment emitted.
    HowToCompiled,
    /// Question compiled but left out of the main-entity index.
    UnansweredQuestion,
}

impl std::fmt::Display for WarningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl WarningType {
    /// Human-readable label used in the summary log.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::UndecodableWidgetTree => "Undecodable widget tree",
            WarningType::WidgetDepthLimit => "Widget tree depth limit reached",
            WarningType::MalformedWidget => "Malformed accordion widget",
            WarningType::EmptyWidgetTitle => "Accordion item without title",
            WarningType::DroppedFaqEntry => "Empty FAQ entry dropped",
            WarningType::DroppedHowToStep => "Empty HowTo step dropped",
            WarningType::MalformedSubmission => "Malformed form submission",
        }
    }
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InfoType {
    /// Human-readable label used in the summary log.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::WidgetItemMined => "Widget FAQ item mined",
            InfoType::QuestionCompiled => "Question fragment compiled",
            InfoType::HowToCompiled => "HowTo fragment compiled",
            InfoType::UnansweredQuestion => "Question without answer",
        }
    }
}
