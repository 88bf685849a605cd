//! faq_howto_schema library: FAQ and HowTo structured data for content pages
//!
//! This library turns author-entered FAQ and HowTo data, or accordion widgets
//! mined from a page-builder layout, into schema.org JSON-LD graph fragments
//! and matching microdata markup.
//!
//! # Example
//!
//! ```
//! use faq_howto_schema::{assemble_graph, FaqItem, FaqPiece, GraphPiece, PageContext, ProcessingStats};
//!
//! let stats = ProcessingStats::new();
//! let faq = FaqPiece::new(vec![FaqItem::new("What is it?", "A demo.")], &stats);
//! let mut ctx = PageContext::new("https://example.com/page/");
//!
//! let pieces: [&dyn GraphPiece; 1] = [&faq];
//! let fragments = assemble_graph(&pieces, &mut ctx);
//! assert_eq!(fragments[0].id(), "https://example.com/page/#faq-question-0");
//! assert!(ctx.has_page_type("FAQPage"));
//! ```

#![warn(missing_docs)]

pub mod config;
mod duration;
pub mod error_handling;
pub mod graph;
pub mod initialization;
mod models;
pub mod normalize;
pub mod render;
pub mod run;
pub mod schema;
pub mod store;
mod utils;
pub mod widget;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use duration::format_duration;
pub use error_handling::{InfoType, ProcessingStats, WarningType};
pub use graph::{assemble_graph, FaqPiece, GraphPiece, HowToPiece};
pub use models::{FaqCollection, FaqItem, HowToData, HowToStep};
pub use normalize::{normalize_faq, normalize_howto, Normalized};
pub use run::{run_page, PageReport};
pub use schema::{compile_faq, compile_howto, IdRef, PageContext, SchemaFragment};
pub use store::{resolve_faq_items, ContentStore, MemoryStore};
pub use utils::{
    autop, escape_html, sanitize_rich_text, sanitize_text_field, sanitize_textarea_field,
    strip_all_tags,
};
pub use widget::{mine_faq_items, WidgetMiner};
