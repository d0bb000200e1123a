// src/compare/comparator.rs
use serde::Serialize;

use super::document::SpecDocument;
use super::verdict::{NOT_SPECIFIED, Verdict, VerdictEngine};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub category: String,
    pub spec_name: String,
    pub baseline_value: String,
    pub competitor_value: String,
    pub verdict: Verdict,
}

/// Contiguous run of rows sharing a category, in baseline order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub rows: &'a [ComparisonRow],
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub competitor_label: String,
    pub rows: Vec<ComparisonRow>,
    /// `"<specName>: <baseline value>"`, row order, uncapped.
    pub baseline_advantages: Vec<String>,
    /// `"<specName>: <competitor value>"`, row order, uncapped.
    pub competitor_advantages: Vec<String>,
}

impl ComparisonResult {
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn count(&self, verdict: Verdict) -> usize {
        self.rows.iter().filter(|r| r.verdict == verdict).count()
    }

    /// Rows grouped by category. Categories without rows do not appear.
    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        let mut out: Vec<CategoryGroup<'_>> = Vec::new();
        let mut start = 0;
        for i in 1..=self.rows.len() {
            if i == self.rows.len() || self.rows[i].category != self.rows[start].category {
                out.push(CategoryGroup {
                    category: &self.rows[start].category,
                    rows: &self.rows[start..i],
                });
                start = i;
            }
        }
        out
    }
}

/// Joins two documents on (category, attribute) using the baseline's layout
/// as the schema, and classifies every row.
#[derive(Clone, Debug, Default)]
pub struct Comparator {
    engine: VerdictEngine,
}

impl Comparator {
    pub fn new(engine: VerdictEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &VerdictEngine { &self.engine }

    pub fn compare(
        &self,
        baseline: &SpecDocument,
        competitor: &SpecDocument,
        competitor_label: &str,
    ) -> ComparisonResult {
        let mut result = ComparisonResult {
            competitor_label: s!(competitor_label),
            rows: Vec::with_capacity(baseline.attribute_count()),
            ..ComparisonResult::default()
        };

        for (category, specs) in &baseline.categories {
            let other = competitor.category(category);

            for (spec_name, baseline_value) in specs {
                let competitor_value = other
                    .and_then(|c| c.get(spec_name))
                    .filter(|v| !v.is_empty())
                    .map(String::as_str)
                    .unwrap_or(NOT_SPECIFIED);

                let verdict = self.engine.judge(spec_name, baseline_value, competitor_value);
                match verdict {
                    Verdict::Baseline => result
                        .baseline_advantages
                        .push(format!("{spec_name}: {baseline_value}")),
                    Verdict::Competitor => result
                        .competitor_advantages
                        .push(format!("{spec_name}: {competitor_value}")),
                    Verdict::Equal => {}
                }

                result.rows.push(ComparisonRow {
                    category: category.clone(),
                    spec_name: spec_name.clone(),
                    baseline_value: baseline_value.clone(),
                    competitor_value: s!(competitor_value),
                    verdict,
                });
            }
        }

        result
    }
}

/// Compare with the default drive-spec directionality policy.
pub fn compare(
    baseline: &SpecDocument,
    competitor: &SpecDocument,
    competitor_label: &str,
) -> ComparisonResult {
    Comparator::default().compare(baseline, competitor, competitor_label)
}
