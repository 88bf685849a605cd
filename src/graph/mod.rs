//! Graph piece adapter.
//!
//! Exposes the compiler through the "is it needed / register / generate"
//! contract of an external graph assembler. [`assemble_graph`] drives that
//! contract for hosts that do not have their own.

mod piece;

// Re-export public API
pub use piece::{FaqPiece, GraphPiece, HowToPiece};

use crate::schema::{PageContext, SchemaFragment};

/// Runs every piece against `ctx` and returns their fragments in piece order.
///
/// Non-singular pages get nothing and `ctx` is left untouched. Otherwise all
/// applicability checks run first, then each needed piece registers its
/// page-level changes exactly once, then fragments are generated from the
/// registered context.
pub fn assemble_graph(pieces: &[&dyn GraphPiece], ctx: &mut PageContext) -> Vec<SchemaFragment> {
    if !ctx.is_singular {
        log::debug!("Page is not singular, skipping {} graph pieces", pieces.len());
        return Vec::new();
    }

    let needed: Vec<&dyn GraphPiece> = pieces
        .iter()
        .copied()
        .filter(|piece| piece.is_needed(&*ctx))
        .collect();

    for piece in &needed {
        piece.register(ctx);
    }

    let mut fragments = Vec::new();
    for piece in &needed {
        let generated = piece.generate(ctx);
        log::debug!("Graph piece '{}' generated {} fragments", piece.name(), generated.len());
        fragments.extend(generated);
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ProcessingStats;
    use crate::models::{FaqItem, HowToData, HowToStep};
    use std::cell::Cell;

    fn howto() -> HowToData {
        HowToData {
            name: "Plant a tree".into(),
            steps: vec![HowToStep::new("Dig", "Dig a hole.")],
            ..Default::default()
        }
    }

    #[test]
    fn test_assembles_faq_then_howto() {
        let stats = ProcessingStats::new();
        let faq = FaqPiece::new(vec![FaqItem::new("Q", "A"), FaqItem::new("Q2", "")], &stats);
        let howto = HowToPiece::new(Some(howto()), &stats);
        let mut ctx = PageContext::new("https://x.test/p");

        let fragments = assemble_graph(&[&faq, &howto], &mut ctx);
        let types: Vec<_> = fragments.iter().map(SchemaFragment::type_name).collect();
        assert_eq!(types, vec!["Question", "Question", "HowTo"]);
        assert_eq!(ctx.schema_page_type, vec!["WebPage", "FAQPage"]);
        assert_eq!(ctx.main_entity_of_page.len(), 1);
    }

    #[test]
    fn test_pieces_are_debug_printable() {
        let stats = ProcessingStats::new();
        let faq = FaqPiece::new(vec![FaqItem::new("Q", "A")], &stats);
        let howto = HowToPiece::new(None, &stats);
        assert!(format!("{:?}", faq).starts_with("FaqPiece"));
        assert!(format!("{:?}", howto).contains("ProcessingStats"));
    }

    #[test]
    fn test_non_singular_page_gets_nothing() {
        let stats = ProcessingStats::new();
        let faq = FaqPiece::new(vec![FaqItem::new("Q", "A")], &stats);
        let mut ctx = PageContext {
            is_singular: false,
            ..PageContext::new("https://x.test/archive")
        };
        assert!(assemble_graph(&[&faq], &mut ctx).is_empty());
        assert_eq!(ctx.schema_page_type, vec!["WebPage"]);
    }

    #[test]
    fn test_unneeded_pieces_do_not_register() {
        let stats = ProcessingStats::new();
        let faq = FaqPiece::new(vec![FaqItem::new("", "answer only")], &stats);
        let howto = HowToPiece::new(None, &stats);
        let mut ctx = PageContext::new("https://x.test/p");
        assert!(!faq.is_needed(&ctx));
        assert!(!howto.is_needed(&ctx));
        assert!(assemble_graph(&[&faq, &howto], &mut ctx).is_empty());
        assert_eq!(ctx, PageContext::new("https://x.test/p"));
    }

    #[test]
    fn test_is_needed_is_pure() {
        let stats = ProcessingStats::new();
        let faq = FaqPiece::new(vec![FaqItem::new("Q", "A")], &stats);
        let ctx = PageContext::new("https://x.test/p");
        let before = ctx.clone();
        assert!(faq.is_needed(&ctx));
        assert!(faq.is_needed(&ctx));
        assert_eq!(ctx, before);
    }

    struct CountingPiece {
        registered: Cell<usize>,
    }

    impl GraphPiece for CountingPiece {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn is_needed(&self, _ctx: &PageContext) -> bool {
            true
        }

        fn register(&self, _ctx: &mut PageContext) {
            self.registered.set(self.registered.get() + 1);
        }

        fn generate(&self, _ctx: &PageContext) -> Vec<SchemaFragment> {
            Vec::new()
        }
    }

    #[test]
    fn test_register_runs_once_per_assembly() {
        let piece = CountingPiece {
            registered: Cell::new(0),
        };
        let mut ctx = PageContext::new("https://x.test/p");
        assemble_graph(&[&piece], &mut ctx);
        assert_eq!(piece.registered.get(), 1);
    }

    #[test]
    fn test_howto_without_steps_is_not_needed() {
        let stats = ProcessingStats::new();
        let data = HowToData {
            name: "Only a name".into(),
            ..Default::default()
        };
        let piece = HowToPiece::new(Some(data), &stats);
        assert!(!piece.is_needed(&PageContext::default()));
    }
}
