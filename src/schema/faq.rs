//! FAQ compilation: Question fragments and the FAQPage registration.

use crate::config::{FAQ_PAGE_TYPE, FAQ_QUESTION_ID_SUFFIX};
use crate::error_handling::{InfoType, ProcessingStats};
use crate::models::FaqItem;
use crate::schema::context::{IdRef, PageContext};
use crate::schema::fragment::{QuestionNode, SchemaFragment};
use crate::utils::strip_all_tags;

/// Compiles FAQ items into `Question` fragments.
///
/// The item at index `i` (0-based, counted over the list as given) gets
/// `@id = canonical#faq-question-{i}` and `position = i + 1`. Items whose
/// question strips to nothing are skipped but still consume their index, so
/// identifiers stay stable when an author blanks one question.
///
/// # Returns
///
/// An empty list when no item has a question; the caller then omits the piece.
pub fn compile_faq(
    items: &[FaqItem],
    ctx: &PageContext,
    stats: &ProcessingStats,
) -> Vec<SchemaFragment> {
    let mut fragments = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let name = strip_all_tags(&item.question);
        if name.is_empty() {
            continue;
        }
        if !item.has_answer() {
            stats.increment_info(InfoType::UnansweredQuestion);
        }
        stats.increment_info(InfoType::QuestionCompiled);
        fragments.push(SchemaFragment::Question(QuestionNode::new(
            question_id(ctx, index),
            index + 1,
            name,
            strip_all_tags(&item.answer),
        )));
    }
    log::debug!("Compiled {} Question fragments", fragments.len());
    fragments
}

/// True when [`compile_faq`] would emit at least one fragment.
pub fn would_emit_faq(items: &[FaqItem]) -> bool {
    items.iter().any(FaqItem::has_question)
}

/// References to the questions that also carry an answer.
///
/// Unanswered questions are compiled but kept out of the page's main entity.
pub fn faq_main_entity(items: &[FaqItem], ctx: &PageContext) -> Vec<IdRef> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.has_question() && item.has_answer())
        .map(|(index, _)| IdRef::new(question_id(ctx, index)))
        .collect()
}

/// Declares the page an `FAQPage` and points its main entity at the answered
/// questions.
///
/// Does nothing and returns `false` when no Question would be emitted. Call
/// once per page render, before generating fragments.
pub fn register_faq_page(items: &[FaqItem], ctx: &mut PageContext) -> bool {
    if !would_emit_faq(items) {
        return false;
    }
    ctx.add_page_type(FAQ_PAGE_TYPE);
    ctx.main_entity_of_page = faq_main_entity(items, ctx);
    log::debug!(
        "Registered {} with {} main entity references",
        FAQ_PAGE_TYPE,
        ctx.main_entity_of_page.len()
    );
    true
}

fn question_id(ctx: &PageContext, index: usize) -> String {
    format!("{}{}", ctx.fragment_id(FAQ_QUESTION_ID_SUFFIX), index)
}
