//! Self-contained JSON-LD documents for hosts without a graph assembler.

use serde_json::{json, Map, Value};

use crate::config::{
    ANSWER_TYPE, FAQ_PAGE_ID_SUFFIX, FAQ_PAGE_TYPE, HOWTO_ID_SUFFIX, HOWTO_STEP_TYPE, HOWTO_TYPE,
    QUESTION_TYPE, SCHEMA_ORG_CONTEXT,
};
use crate::models::{FaqItem, HowToData};
use crate::schema::context::PageContext;
use crate::schema::fragment::SchemaFragment;
use crate::utils::strip_all_tags;

/// A standalone `FAQPage` with inline Questions.
///
/// Returns `None` when no item has a question.
pub fn faq_page_document(items: &[FaqItem], page_url: &str) -> Option<Value> {
    let questions: Vec<Value> = items
        .iter()
        .filter_map(|item| {
            let name = strip_all_tags(&item.question);
            if name.is_empty() {
                return None;
            }
            Some(json!({
                "@type": QUESTION_TYPE,
                "name": name,
                "acceptedAnswer": {
                    "@type": ANSWER_TYPE,
                    "text": strip_all_tags(&item.answer),
                },
            }))
        })
        .collect();

    if questions.is_empty() {
        return None;
    }

    Some(json!({
        "@context": SCHEMA_ORG_CONTEXT,
        "@type": FAQ_PAGE_TYPE,
        "@id": format!("{}{}", page_url, FAQ_PAGE_ID_SUFFIX),
        "mainEntity": questions,
    }))
}

/// A standalone `HowTo` whose steps carry a 1-based `position`.
///
/// Returns `None` without retained steps.
pub fn howto_document(data: &HowToData, page_url: &str) -> Option<Value> {
    let steps: Vec<Value> = data
        .retained_steps()
        .enumerate()
        .map(|(index, step)| {
            let mut node = Map::new();
            node.insert("@type".into(), json!(HOWTO_STEP_TYPE));
            node.insert("position".into(), json!(index + 1));
            insert_non_empty(&mut node, "name", strip_all_tags(&step.name));
            insert_non_empty(&mut node, "text", strip_all_tags(&step.text));
            Value::Object(node)
        })
        .collect();

    if steps.is_empty() {
        return None;
    }

    let mut doc = Map::new();
    doc.insert("@context".into(), json!(SCHEMA_ORG_CONTEXT));
    doc.insert("@type".into(), json!(HOWTO_TYPE));
    doc.insert("@id".into(), json!(format!("{}{}", page_url, HOWTO_ID_SUFFIX)));
    insert_non_empty(&mut doc, "name", strip_all_tags(&data.name));
    insert_non_empty(&mut doc, "description", strip_all_tags(&data.description));
    insert_non_empty(&mut doc, "totalTime", data.total_time.clone());
    doc.insert("step".into(), Value::Array(steps));
    Some(Value::Object(doc))
}

/// The page node followed by `fragments`, wrapped in an `@graph` document.
///
/// The page node carries the context's type list and, when the registration
/// step filled it, its main entity references.
pub fn graph_document(ctx: &PageContext, fragments: &[SchemaFragment]) -> Value {
    let mut page = Map::new();
    page.insert("@type".into(), page_type_value(&ctx.schema_page_type));
    page.insert("@id".into(), json!(ctx.main_schema_id));
    page.insert("url".into(), json!(ctx.canonical));
    if !ctx.main_entity_of_page.is_empty() {
        page.insert("mainEntity".into(), json!(ctx.main_entity_of_page));
    }

    let mut graph = Vec::with_capacity(fragments.len() + 1);
    graph.push(Value::Object(page));
    graph.extend(fragments.iter().map(SchemaFragment::to_value));

    json!({
        "@context": SCHEMA_ORG_CONTEXT,
        "@graph": graph,
    })
}

fn page_type_value(types: &[String]) -> Value {
    match types {
        [single] => json!(single),
        _ => json!(types),
    }
}

fn insert_non_empty(node: &mut Map<String, Value>, key: &str, text: String) {
    if !text.is_empty() {
        node.insert(key.to_string(), Value::String(text));
    }
}
