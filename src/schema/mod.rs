//! schema.org JSON-LD compilation.
//!
//! Normalized FAQ and HowTo records plus a [`PageContext`] go in, typed graph
//! fragments come out. Every function here is total: data that does not fit
//! yields an empty result and the caller leaves the piece out of the graph.
//!
//! Identifier shapes are part of the output contract:
//! - Questions: `canonical#faq-question-{i}`, `i` 0-based
//! - HowTo steps: `canonical#howto-step-{i}`, `i` 1-based

mod context;
mod faq;
mod fragment;
mod howto;
pub mod standalone;

// Re-export public API
pub use context::{IdRef, PageContext};
pub use faq::{compile_faq, faq_main_entity, register_faq_page, would_emit_faq};
pub use fragment::{AnswerNode, HowToNode, HowToStepNode, QuestionNode, SchemaFragment};
pub use howto::{compile_howto, would_emit_howto};
pub use standalone::{faq_page_document, graph_document, howto_document};
