//! Configuration constants.
//!
//! This module defines the constants shared by the miner, the compiler and the
//! renderer: fragment identifier suffixes, widget type tags, traversal limits and
//! the rich-text allowlist.

// Fragment identifiers
/// Suffix appended to the canonical URL for a FAQ question, followed by the
/// 0-based index of the item.
pub const FAQ_QUESTION_ID_SUFFIX: &str = "#faq-question-";
/// Suffix appended to the canonical URL for the HowTo node.
pub const HOWTO_ID_SUFFIX: &str = "#howto";
/// Suffix appended to the canonical URL for a HowTo step, followed by the
/// 1-based step number.
pub const HOWTO_STEP_ID_SUFFIX: &str = "#howto-step-";
/// Suffix used by standalone FAQPage documents.
pub const FAQ_PAGE_ID_SUFFIX: &str = "#faqpage";

/// JSON-LD `@context` value for standalone documents.
pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// Page type added when a page carries Question fragments.
pub const FAQ_PAGE_TYPE: &str = "FAQPage";
/// schema.org `Question`.
pub const QUESTION_TYPE: &str = "Question";
/// schema.org `Answer`.
pub const ANSWER_TYPE: &str = "Answer";
/// schema.org `HowTo`.
pub const HOWTO_TYPE: &str = "HowTo";
/// schema.org `HowToStep`.
pub const HOWTO_STEP_TYPE: &str = "HowToStep";
/// Page type used when the host did not declare one.
pub const DEFAULT_PAGE_TYPE: &str = "WebPage";

// Page-builder widget tags
/// Accordion whose panels are child containers.
pub const NESTED_ACCORDION_WIDGET: &str = "nested-accordion";
/// Classic accordion with `settings.tabs`.
pub const ACCORDION_WIDGET: &str = "accordion";
/// Toggle list, same settings as the classic accordion.
pub const TOGGLE_WIDGET: &str = "toggle";
/// Rich-text widget holding a nested-accordion panel body.
pub const TEXT_EDITOR_WIDGET: &str = "text-editor";

// Widget tree traversal limits
/// Default maximum nesting depth visited by the widget miner.
/// Real layouts rarely exceed 10 levels (section > container > column > widget).
pub const DEFAULT_MAX_WIDGET_DEPTH: usize = 64;
/// Upper bound accepted for a configured maximum depth.
pub const MAX_WIDGET_DEPTH_LIMIT: usize = 128;
/// Deepest bracket nesting accepted when decoding a serialized layout.
/// Each widget level costs two brackets (node object and its `elements`
/// list); the slack covers the accordion settings below the deepest widget.
pub const MAX_LAYOUT_NESTING: usize = 2 * MAX_WIDGET_DEPTH_LIMIT + 16;

/// Marker emitted by the FAQ shortcode when the accordion widget already shows
/// the questions on the page.
pub const WIDGET_SOURCE_MARKER: &str = "<!-- FAQ Schema: Using Elementor Accordion -->";

/// Elements whose whole subtree is removed by the sanitizers (text included).
pub const DROPPED_SUBTREE_TAGS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template",
];

/// URL schemes allowed in `href`/`src` attributes of sanitized rich text.
pub const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "mailto", "tel", "ftp"];

/// Tags kept by the rich-text sanitizer, with the attributes each may carry.
pub const ALLOWED_RICH_TEXT_TAGS: &[(&str, &[&str])] = &[
    ("a", &["href", "title", "target", "rel"]),
    ("abbr", &["title"]),
    ("b", &[]),
    ("blockquote", &["cite"]),
    ("br", &[]),
    ("cite", &[]),
    ("code", &[]),
    ("del", &["datetime"]),
    ("div", &["class"]),
    ("em", &[]),
    ("figcaption", &[]),
    ("figure", &[]),
    ("h1", &[]),
    ("h2", &[]),
    ("h3", &[]),
    ("h4", &[]),
    ("h5", &[]),
    ("h6", &[]),
    ("hr", &[]),
    ("i", &[]),
    ("img", &["src", "alt", "title", "width", "height"]),
    ("ins", &["datetime"]),
    ("li", &[]),
    ("ol", &["start"]),
    ("p", &["class"]),
    ("pre", &[]),
    ("q", &["cite"]),
    ("s", &[]),
    ("span", &["class"]),
    ("strong", &[]),
    ("sub", &[]),
    ("sup", &[]),
    ("table", &[]),
    ("tbody", &[]),
    ("td", &["colspan", "rowspan"]),
    ("tfoot", &[]),
    ("th", &["colspan", "rowspan", "scope"]),
    ("thead", &[]),
    ("tr", &[]),
    ("u", &[]),
    ("ul", &[]),
];

/// Elements serialized without a closing tag.
pub const VOID_TAGS: &[&str] = &["br", "hr", "img"];
