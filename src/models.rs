//! Canonical FAQ and HowTo records.
//!
//! These are the shapes produced by the normalizer and the widget miner, stored
//! by the content store and consumed by the compiler and the renderer.

use serde::{Deserialize, Serialize};

use crate::utils::strip_all_tags;

/// One question/answer pair.
///
/// The answer holds sanitized rich text. The item's position in its list
/// decides its fragment identifier and display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Question text, possibly with inline markup.
    #[serde(default)]
    pub question: String,
    /// Answer as sanitized rich text.
    #[serde(default)]
    pub answer: String,
}

impl FaqItem {
    /// Creates an item from raw question and answer text.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// True when the item would be compiled to a Question: the question still
    /// has text once its markup is stripped.
    pub fn has_question(&self) -> bool {
        !strip_all_tags(&self.question).is_empty()
    }

    /// True when the answer still has text once its markup is stripped.
    pub fn has_answer(&self) -> bool {
        !strip_all_tags(&self.answer).is_empty()
    }
}

/// The FAQ data attached to one content item.
///
/// When `use_external_source` is set, the items are mined from the page-builder
/// widget tree and `items` is ignored entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqCollection {
    /// Items entered by hand.
    #[serde(default)]
    pub items: Vec<FaqItem>,
    /// Read the FAQ from the widget tree instead.
    #[serde(default)]
    pub use_external_source: bool,
}

/// One HowTo instruction. The 1-based position is derived from the index at
/// compile time and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowToStep {
    /// Short step title.
    #[serde(default)]
    pub name: String,
    /// Step instructions, rich text.
    #[serde(default)]
    pub text: String,
}

impl HowToStep {
    /// Creates a step from raw name and text.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// A step with neither a name nor a text is never compiled.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.text.trim().is_empty()
    }
}

/// HowTo metadata plus its ordered steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowToData {
    /// HowTo title.
    #[serde(default)]
    pub name: String,
    /// Introductory text.
    #[serde(default)]
    pub description: String,
    /// ISO 8601 duration such as `PT30M`, or empty.
    #[serde(default, alias = "totalTime")]
    pub total_time: String,
    /// Steps in submission order, empty ones included.
    #[serde(default)]
    pub steps: Vec<HowToStep>,
}

impl HowToData {
    /// Steps that survive the empty-step filter, in order.
    pub fn retained_steps(&self) -> impl Iterator<Item = &HowToStep> {
        self.steps.iter().filter(|step| !step.is_empty())
    }

    /// True when at least one step is retained.
    pub fn has_steps(&self) -> bool {
        self.retained_steps().next().is_some()
    }
}
