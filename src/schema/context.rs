//! Page identity consumed by the compiler and mutated by the registration step.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::DEFAULT_PAGE_TYPE;

/// A JSON-LD node reference: `{"@id": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdRef {
    /// The referenced node's `@id`.
    #[serde(rename = "@id")]
    pub id: String,
}

impl IdRef {
    /// Reference to the node identified by `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Identity of the page being rendered, owned by the host graph assembler.
///
/// `canonical` prefixes every fragment identifier; `main_schema_id` is the
/// page node's own `@id`. The FAQ registration step appends to
/// `schema_page_type` and fills `main_entity_of_page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContext {
    /// Canonical page URL.
    #[serde(alias = "canonicalUrl")]
    pub canonical: String,
    /// `@id` of the page node.
    #[serde(alias = "mainSchemaId")]
    pub main_schema_id: String,
    /// Declared page types. Deserializes from a single string or a list.
    #[serde(alias = "schemaPageType", deserialize_with = "one_or_many")]
    pub schema_page_type: Vec<String>,
    /// References to the page's main entities.
    #[serde(alias = "mainEntityOfPage")]
    pub main_entity_of_page: Vec<IdRef>,
    /// Archive and listing pages never get FAQ or HowTo pieces.
    #[serde(alias = "isSingular")]
    pub is_singular: bool,
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            canonical: String::new(),
            main_schema_id: String::new(),
            schema_page_type: vec![DEFAULT_PAGE_TYPE.to_string()],
            main_entity_of_page: Vec::new(),
            is_singular: true,
        }
    }
}

impl PageContext {
    /// Context for a singular page whose main schema node is `canonical` itself.
    pub fn new(canonical: impl Into<String>) -> Self {
        let canonical = canonical.into();
        Self {
            main_schema_id: canonical.clone(),
            canonical,
            ..Default::default()
        }
    }

    /// Overrides the page node's `@id`.
    pub fn with_main_schema_id(mut self, main_schema_id: impl Into<String>) -> Self {
        self.main_schema_id = main_schema_id.into();
        self
    }

    /// Replaces the declared page types.
    pub fn with_page_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schema_page_type = types.into_iter().map(Into::into).collect();
        self
    }

    /// Fragment identifier under this page: `canonical + suffix`.
    pub fn fragment_id(&self, suffix: &str) -> String {
        format!("{}{}", self.canonical, suffix)
    }

    /// True when `page_type` is already declared.
    pub fn has_page_type(&self, page_type: &str) -> bool {
        self.schema_page_type.iter().any(|t| t == page_type)
    }

    /// Appends `page_type` unless already declared.
    ///
    /// Returns `true` when the list changed.
    pub fn add_page_type(&mut self, page_type: &str) -> bool {
        if self.has_page_type(page_type) {
            return false;
        }
        self.schema_page_type.push(page_type.to_string());
        true
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(single)) => vec![single],
        Some(OneOrMany::Many(list)) => list,
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_type_accepts_string_or_list() {
        let single: PageContext =
            serde_json::from_str(r#"{"canonical":"https://x.test/a","schema_page_type":"Article"}"#)
                .unwrap();
        assert_eq!(single.schema_page_type, vec!["Article"]);

        let many: PageContext =
            serde_json::from_str(r#"{"schemaPageType":["WebPage","ItemPage"]}"#).unwrap();
        assert_eq!(many.schema_page_type, vec!["WebPage", "ItemPage"]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let ctx: PageContext = serde_json::from_str(r#"{"canonicalUrl":"https://x.test/"}"#).unwrap();
        assert_eq!(ctx.canonical, "https://x.test/");
        assert_eq!(ctx.schema_page_type, vec![DEFAULT_PAGE_TYPE]);
        assert!(ctx.is_singular);
        assert!(ctx.main_entity_of_page.is_empty());
    }

    #[test]
    fn test_add_page_type_is_idempotent() {
        let mut ctx = PageContext::new("https://x.test/");
        assert!(ctx.add_page_type("FAQPage"));
        assert!(!ctx.add_page_type("FAQPage"));
        assert_eq!(ctx.schema_page_type, vec!["WebPage", "FAQPage"]);
    }

    #[test]
    fn test_fragment_id_and_main_schema_id() {
        let ctx = PageContext::new("https://x.test/p").with_main_schema_id("https://x.test/p#webpage");
        assert_eq!(ctx.fragment_id("#howto"), "https://x.test/p#howto");
        assert_eq!(ctx.main_schema_id, "https://x.test/p#webpage");
    }
}
