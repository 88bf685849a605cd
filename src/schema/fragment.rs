//! Typed JSON-LD nodes produced by the compiler.
//!
//! Optional fields are omitted from the serialized node rather than emitted as
//! empty strings.

use serde::Serialize;
use serde_json::Value;

use crate::config::{ANSWER_TYPE, HOWTO_STEP_TYPE, HOWTO_TYPE, QUESTION_TYPE};
use crate::schema::context::IdRef;

/// `Answer` node nested in a Question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerNode {
    /// schema.org type, always the same for this node.
    #[serde(rename = "@type")]
    pub type_name: &'static str,
    /// Answer as plain text.
    pub text: String,
}

impl AnswerNode {
    /// Answer node holding `text`.
    pub fn new(text: String) -> Self {
        Self {
            type_name: ANSWER_TYPE,
            text,
        }
    }
}

/// `Question` graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionNode {
    /// schema.org type, always the same for this node.
    #[serde(rename = "@type")]
    pub type_name: &'static str,
    /// `canonical#faq-question-<index>`.
    #[serde(rename = "@id")]
    pub id: String,
    /// 1-based index in the submitted list.
    pub position: usize,
    /// Same as `id`.
    pub url: String,
    /// Question as plain text.
    pub name: String,
    /// Always 1.
    pub answer_count: u32,
    /// The single accepted answer.
    pub accepted_answer: AnswerNode,
}

impl QuestionNode {
    /// A question whose `url` repeats its `@id`.
    pub fn new(id: String, position: usize, name: String, answer: String) -> Self {
        Self {
            type_name: QUESTION_TYPE,
            url: id.clone(),
            id,
            position,
            name,
            answer_count: 1,
            accepted_answer: AnswerNode::new(answer),
        }
    }
}

/// `HowToStep` node nested in a HowTo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HowToStepNode {
    /// schema.org type, always the same for this node.
    #[serde(rename = "@type")]
    pub type_name: &'static str,
    /// Step anchor under the page.
    pub url: String,
    /// Step name as plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Step instructions as plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl HowToStepNode {
    /// Step node; empty name or text is passed as `None`.
    pub fn new(url: String, name: Option<String>, text: Option<String>) -> Self {
        Self {
            type_name: HOWTO_STEP_TYPE,
            url,
            name,
            text,
        }
    }
}

/// `HowTo` graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HowToNode {
    /// schema.org type, always the same for this node.
    #[serde(rename = "@type")]
    pub type_name: &'static str,
    /// `canonical#howto`.
    #[serde(rename = "@id")]
    pub id: String,
    /// Reference to the page node.
    pub main_entity_of_page: IdRef,
    /// Title as plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description as plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO 8601 duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    /// Retained steps in order.
    pub step: Vec<HowToStepNode>,
}

/// One top-level node handed to the graph assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SchemaFragment {
    /// One FAQ question.
    Question(QuestionNode),
    /// The page's HowTo.
    HowTo(HowToNode),
}

impl SchemaFragment {
    /// The fragment's `@id`.
    pub fn id(&self) -> &str {
        match self {
            SchemaFragment::Question(node) => &node.id,
            SchemaFragment::HowTo(node) => &node.id,
        }
    }

    /// The fragment's `@type`.
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaFragment::Question(_) => QUESTION_TYPE,
            SchemaFragment::HowTo(_) => HOWTO_TYPE,
        }
    }

    /// The fragment as a JSON value.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            log::error!("Failed to serialize {} fragment {}: {}", self.type_name(), self.id(), e);
            Value::Null
        })
    }
}

/// Wraps optional text, treating empty as absent.
pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_question_serializes_json_ld_keys() {
        let node = QuestionNode::new("u#faq-question-0".into(), 1, "Q".into(), "A".into());
        assert_eq!(
            SchemaFragment::Question(node).to_value(),
            json!({
                "@type": "Question",
                "@id": "u#faq-question-0",
                "position": 1,
                "url": "u#faq-question-0",
                "name": "Q",
                "answerCount": 1,
                "acceptedAnswer": {"@type": "Answer", "text": "A"}
            })
        );
    }

    #[test]
    fn test_step_omits_missing_fields() {
        let step = HowToStepNode::new("u#howto-step-1".into(), None, Some("Do it".into()));
        assert_eq!(
            serde_json::to_value(&step).unwrap(),
            json!({"@type": "HowToStep", "url": "u#howto-step-1", "text": "Do it"})
        );
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("x".into()), Some("x".to_string()));
    }
}
