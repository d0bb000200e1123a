// src/live/scrape.rs
//
// Spec-table extraction from manufacturer product pages.
//
// Tolerant by intent: tables are found by class fragment, rows by <tr>,
// label = first cell, value = last cell. Anything that does not fit is
// skipped rather than reported. When no table yields a row, <dl> lists and
// `data-spec-name` attributes are tried instead.

use indexmap::IndexMap;

use super::endpoints::TableProfile;
use crate::compare::SpecCategory;
use crate::core::html;

pub const DEFAULT_CATEGORY: &str = "General Specifications";
pub const FALLBACK_CATEGORY: &str = "Technical Data";
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

pub fn extract_specifications(doc: &str, profile: &TableProfile) -> IndexMap<String, SpecCategory> {
    let mut specs: IndexMap<String, SpecCategory> = IndexMap::new();

    for table in html::elements_ci(doc, "table") {
        let open = html::open_tag(table);
        if !profile.table_markers.iter().any(|m| html::class_contains(open, m)) {
            continue;
        }

        let mut current = s!(DEFAULT_CATEGORY);
        for row in html::elements_ci(table, "tr") {
            let cells = row_cells(row);
            let Some(label_cell) = cells.first() else { continue };

            let label = html::text_of(label_cell);
            let value = match cells.last() {
                Some(v) if cells.len() > 1 => html::text_of(v),
                _ => s!(),
            };

            let header = html::has_class(html::open_tag(row), "category-header")
                || html::class_contains(html::open_tag(label_cell), "category")
                || (html::tag_name(label_cell) == "th" && value.is_empty());

            if header {
                if !label.is_empty() {
                    logd!("Scrape: category '{label}'");
                    specs.insert(label.clone(), SpecCategory::new());
                    current = label;
                }
            } else if !label.is_empty() && !value.is_empty() {
                specs.entry(current.clone()).or_default().insert(label, value);
            }
        }
    }

    // Headers with no rows under them carry nothing to compare.
    specs.retain(|_, attrs| !attrs.is_empty());

    if specs.is_empty() {
        logd!("Scrape: no spec table rows, trying <dl>/data-spec-name");
        return extract_specs_alternative(doc);
    }
    specs
}

/// `<dl>` term/description pairs and `data-spec-name` elements, all under
/// one "Technical Data" category. Empty map when neither is present.
pub fn extract_specs_alternative(doc: &str) -> IndexMap<String, SpecCategory> {
    let mut tech = SpecCategory::new();

    for dl in html::elements_ci(doc, "dl") {
        let terms = html::elements_ci(dl, "dt");
        let descs = html::elements_ci(dl, "dd");
        for (t, d) in terms.iter().zip(descs.iter()) {
            let name = html::text_of(t);
            if !name.is_empty() {
                tech.insert(name, html::text_of(d));
            }
        }
    }

    for (name, value) in data_spec_attributes(doc) {
        tech.insert(name, value);
    }

    let mut out = IndexMap::new();
    if !tech.is_empty() {
        out.insert(s!(FALLBACK_CATEGORY), tech);
    }
    out
}

/// First non-empty match of, in order: `h1.product-title`, `h1.product-name`,
/// `.product-header h1`, `h1[class*="product"]`, any `h1`.
pub fn extract_product_name(doc: &str) -> String {
    let h1s = html::elements_ci(doc, "h1");
    let text = |b: &&str| html::text_of(b);

    let by_class = |class: &str| {
        h1s.iter()
            .filter(|b| html::has_class(html::open_tag(b), class))
            .map(text)
            .find(|t| !t.is_empty())
    };

    by_class("product-title")
        .or_else(|| by_class("product-name"))
        .or_else(|| h1_under_product_header(doc))
        .or_else(|| {
            h1s.iter()
                .filter(|b| html::class_contains(html::open_tag(b), "product"))
                .map(text)
                .find(|t| !t.is_empty())
        })
        .or_else(|| h1s.iter().map(text).find(|t| !t.is_empty()))
        .unwrap_or_else(|| s!(UNKNOWN_PRODUCT))
}

fn h1_under_product_header(doc: &str) -> Option<String> {
    ["div", "header", "section"].iter().find_map(|tag| {
        html::elements_ci(doc, tag)
            .into_iter()
            .filter(|b| html::has_class(html::open_tag(b), "product-header"))
            .flat_map(|b| html::elements_ci(b, "h1"))
            .map(html::text_of)
            .find(|t| !t.is_empty())
    })
}

/// <td>/<th> blocks of a row in document order.
fn row_cells(row: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    loop {
        let td = html::next_element_ci(row, "td", pos);
        let th = html::next_element_ci(row, "th", pos);
        let (a, b) = match (td, th) {
            (Some(x), Some(y)) => if x.0 < y.0 { x } else { y },
            (Some(x), None) | (None, Some(x)) => x,
            (None, None) => break,
        };
        out.push(&row[a..b]);
        pos = b;
    }
    out
}

/// `(name, value)` for every opening tag carrying `data-spec-name`.
/// Value is `data-spec-value` when present, else the element's text.
fn data_spec_attributes(doc: &str) -> Vec<(String, String)> {
    let lc = html::to_lower(doc);
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some(rel) = lc[pos..].find("data-spec-name") {
        let at = pos + rel;
        pos = at + "data-spec-name".len();

        let Some(tag_start) = lc[..at].rfind('<') else { continue };
        let Some(tag_end) = lc[at..].find('>').map(|i| at + i + 1) else { break };
        let open = &doc[tag_start..tag_end];

        let Some(name) = html::attr_value(open, "data-spec-name") else { continue };
        let value = match html::attr_value(open, "data-spec-value") {
            Some(v) => v,
            None => {
                let tag = html::tag_name(open);
                html::next_element_ci(doc, &tag, tag_start)
                    .filter(|(s, _)| *s == tag_start)
                    .map(|(s, e)| html::text_of(&doc[s..e]))
                    .unwrap_or_default()
            }
        };
        if !name.is_empty() {
            out.push((name, value));
        }
        pos = pos.max(tag_end);
    }
    out
}
