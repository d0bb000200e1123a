// src/catalog/mod.rs
//! Bundled product database.
//!
//! The data lives in `data/products.json` and is compiled into the binary.
//! Lookups are total over the known key set and return `None` otherwise;
//! callers decide what an unknown key means.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::compare::SpecDocument;

static PRODUCTS_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/products.json"));

/// One selectable power bracket of a baseline series.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct PowerOption {
    pub value: String,
    pub label: String,
}

impl From<(String, String)> for PowerOption {
    fn from((value, label): (String, String)) -> Self {
        Self { value, label }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BaselineSection {
    manufacturer: String,
    #[serde(default)]
    power_options: IndexMap<String, Vec<PowerOption>>,
    products: IndexMap<String, SpecDocument>,
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
    baseline: BaselineSection,
    competitors: IndexMap<String, IndexMap<String, SpecDocument>>,
    /// Display order of each brand's products.
    #[serde(default)]
    lineup: IndexMap<String, Vec<String>>,
    #[serde(default)]
    sources: IndexMap<String, String>,
}

impl Catalog {
    pub fn load_bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(PRODUCTS_JSON)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let catalog: Catalog = serde_json::from_str(text)?;
        logd!(
            "Catalog: {} baseline series, {} competitor brand(s)",
            catalog.baseline.products.len(),
            catalog.competitors.len()
        );
        Ok(catalog)
    }

    /* ---------- baseline ---------- */

    pub fn baseline_manufacturer(&self) -> &str {
        &self.baseline.manufacturer
    }

    pub fn baseline_series(&self) -> impl Iterator<Item = (&str, &SpecDocument)> {
        self.baseline.products.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get_baseline_spec(&self, series_id: &str) -> Option<&SpecDocument> {
        self.baseline.products.get(series_id)
    }

    pub fn power_options(&self, series_id: &str) -> &[PowerOption] {
        self.baseline
            .power_options
            .get(series_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /* ---------- competitors ---------- */

    pub fn competitor_brands(&self) -> impl Iterator<Item = &str> {
        self.competitors.keys().map(String::as_str)
    }

    /// Canonical spelling of a brand key (`"abb"` → `"ABB"`).
    pub fn resolve_brand(&self, brand: &str) -> Option<&str> {
        self.competitors
            .keys()
            .find(|k| k.eq_ignore_ascii_case(brand))
            .map(String::as_str)
    }

    /// A brand's products in line-up order. Products missing from the
    /// line-up are appended in data order.
    pub fn competitor_products(&self, brand: &str) -> Vec<(&str, &SpecDocument)> {
        let Some(key) = self.resolve_brand(brand) else { return Vec::new() };
        let Some(products) = self.competitors.get(key) else { return Vec::new() };

        let mut out: Vec<(&str, &SpecDocument)> = Vec::with_capacity(products.len());
        if let Some(order) = self.lineup.get(key) {
            for id in order {
                if let Some((k, doc)) = products.get_key_value(id) {
                    out.push((k.as_str(), doc));
                }
            }
        }
        for (k, doc) in products {
            if !out.iter().any(|(id, _)| *id == k.as_str()) {
                out.push((k.as_str(), doc));
            }
        }
        out
    }

    pub fn get_competitor_spec(&self, brand: &str, product_id: &str) -> Option<&SpecDocument> {
        let key = self.resolve_brand(brand)?;
        self.competitors.get(key)?.get(product_id)
    }

    /// Public product-information URL for a manufacturer, if known.
    pub fn source_url(&self, manufacturer: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(manufacturer))
            .map(|(_, v)| v.as_str())
    }
}
