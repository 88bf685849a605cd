//! The two-phase piece contract and the FAQ/HowTo pieces.

use crate::error_handling::ProcessingStats;
use crate::models::{FaqItem, HowToData};
use crate::schema::{
    compile_faq, compile_howto, register_faq_page, would_emit_faq, would_emit_howto, PageContext,
    SchemaFragment,
};

/// A contributor to the page's JSON-LD graph.
///
/// The assembler asks every piece [`is_needed`](GraphPiece::is_needed) first,
/// lets the needed ones [`register`](GraphPiece::register) page-level changes,
/// then collects [`generate`](GraphPiece::generate) output in piece order.
pub trait GraphPiece {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether the piece has anything to emit. Must not have side effects.
    fn is_needed(&self, ctx: &PageContext) -> bool;

    /// Page-level context changes; runs once per render, only for needed pieces.
    fn register(&self, _ctx: &mut PageContext) {}

    fn generate(&self, ctx: &PageContext) -> Vec<SchemaFragment>;
}

/// Question fragments for one page, plus the `FAQPage` registration.
#[derive(Debug)]
pub struct FaqPiece<'a> {
    items: Vec<FaqItem>,
    stats: &'a ProcessingStats,
}

impl<'a> FaqPiece<'a> {
    /// `items` must already be resolved (stored list or mined widget tree).
    pub fn new(items: Vec<FaqItem>, stats: &'a ProcessingStats) -> Self {
        Self { items, stats }
    }

    /// The resolved items, in display order.
    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }
}

impl GraphPiece for FaqPiece<'_> {
    fn name(&self) -> &'static str {
        "faq"
    }

    fn is_needed(&self, _ctx: &PageContext) -> bool {
        would_emit_faq(&self.items)
    }

    fn register(&self, ctx: &mut PageContext) {
        register_faq_page(&self.items, ctx);
    }

    fn generate(&self, ctx: &PageContext) -> Vec<SchemaFragment> {
        compile_faq(&self.items, ctx, self.stats)
    }
}

/// The page's HowTo fragment.
#[derive(Debug)]
pub struct HowToPiece<'a> {
    data: Option<HowToData>,
    stats: &'a ProcessingStats,
}

impl<'a> HowToPiece<'a> {
    /// `data` is the stored HowTo, if any.
    pub fn new(data: Option<HowToData>, stats: &'a ProcessingStats) -> Self {
        Self { data, stats }
    }
}

impl GraphPiece for HowToPiece<'_> {
    fn name(&self) -> &'static str {
        "howto"
    }

    fn is_needed(&self, _ctx: &PageContext) -> bool {
        self.data.as_ref().is_some_and(would_emit_howto)
    }

    fn generate(&self, ctx: &PageContext) -> Vec<SchemaFragment> {
        match &self.data {
            Some(data) => compile_howto(data, ctx, self.stats),
            None => Vec::new(),
        }
    }
}
