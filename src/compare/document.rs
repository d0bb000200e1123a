// src/compare/document.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute name → value, in source order.
pub type SpecCategory = IndexMap<String, String>;

/// One product's specifications, as delivered by the catalog or a live fetch.
///
/// Category and attribute names are join keys against the other side of a
/// comparison and are matched by exact string equality.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecDocument {
    pub name: String,
    #[serde(rename = "manufacturer", default)]
    pub brand: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// Unix seconds; only set on documents that came from a live fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<u64>,

    #[serde(rename = "specifications", default)]
    pub categories: IndexMap<String, SpecCategory>,
}

impl SpecDocument {
    pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self { name: name.into(), brand: brand.into(), ..Self::default() }
    }

    /// Builder-style helper: append (or extend) a category with attributes in order.
    pub fn with_category<K, V, I>(mut self, category: &str, attrs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let cat = self.categories.entry(s!(category)).or_default();
        for (k, v) in attrs {
            cat.insert(k.into(), v.into());
        }
        self
    }

    pub fn category(&self, name: &str) -> Option<&SpecCategory> {
        self.categories.get(name)
    }

    pub fn value(&self, category: &str, attribute: &str) -> Option<&str> {
        self.categories.get(category)?.get(attribute).map(String::as_str)
    }

    /// Total attribute count across all categories.
    pub fn attribute_count(&self) -> usize {
        self.categories.values().map(|c| c.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.attribute_count() == 0
    }
}
