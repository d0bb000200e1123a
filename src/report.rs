// src/report.rs
//! Presentation of a `ComparisonResult`: table cells, advantage badges,
//! the capped advantage summary and a plain-text rendering. Shared by the
//! CLI, the GUI table and file export.

use std::fmt::Write as _;

use crate::compare::{ ComparisonResult, ComparisonRow, SpecDocument, Verdict };
use crate::config::consts::{ DEFAULT_FILE, NO_ADVANTAGES, SIMILAR_LABEL, SUMMARY_LIMIT };
use crate::core::sanitize::sanitize_filename;
use crate::loader::{ LoadedPair, Origin };

pub struct Report<'a> {
    pub baseline_brand: &'a str,
    pub baseline_model: &'a str,
    pub competitor_model: &'a str,
    baseline_id: &'a str,
    competitor_id: &'a str,
    pub result: &'a ComparisonResult,
    pub origins: Option<(Origin, Origin)>,
}

impl<'a> Report<'a> {
    pub fn new(
        baseline_brand: &'a str,
        baseline: &'a SpecDocument,
        competitor: &'a SpecDocument,
        result: &'a ComparisonResult,
    ) -> Self {
        Self {
            baseline_brand,
            baseline_model: &baseline.name,
            competitor_model: &competitor.name,
            baseline_id: baseline.series.as_deref().unwrap_or(&baseline.name),
            competitor_id: competitor.series.as_deref().unwrap_or(&competitor.name),
            result,
            origins: None,
        }
    }

    pub fn from_pair(baseline_brand: &'a str, pair: &'a LoadedPair, result: &'a ComparisonResult) -> Self {
        Self {
            origins: Some((pair.baseline.origin, pair.competitor.origin)),
            ..Self::new(baseline_brand, &pair.baseline.document, &pair.competitor.document, result)
        }
    }

    pub fn headers(&self) -> Vec<String> {
        vec![
            s!("Category"),
            s!("Specification"),
            s!(self.baseline_model),
            s!(self.competitor_model),
            s!("Advantage"),
        ]
    }

    pub fn badge(&self, verdict: Verdict) -> &str {
        match verdict {
            Verdict::Baseline => self.baseline_brand,
            Verdict::Competitor => &self.result.competitor_label,
            Verdict::Equal => SIMILAR_LABEL,
        }
    }

    fn cells(&self, row: &ComparisonRow) -> Vec<String> {
        vec![
            row.category.clone(),
            row.spec_name.clone(),
            row.baseline_value.clone(),
            row.competitor_value.clone(),
            s!(self.badge(row.verdict)),
        ]
    }

    /// One row per comparison row, category repeated on every line
    /// (export keeps each line self-contained).
    pub fn table_rows(&self, only_differences: bool) -> Vec<Vec<String>> {
        self.result
            .rows
            .iter()
            .filter(|r| !only_differences || r.verdict != Verdict::Equal)
            .map(|r| self.cells(r))
            .collect()
    }

    pub fn baseline_summary(&self) -> Vec<&str> {
        summary(&self.result.baseline_advantages)
    }

    pub fn competitor_summary(&self) -> Vec<&str> {
        summary(&self.result.competitor_advantages)
    }

    /// File stem suggestion, e.g. `FC_302_vs_ACS880`.
    pub fn export_stem(&self) -> String {
        let raw = format!("{}_vs_{}", self.baseline_id, self.competitor_id);
        sanitize_filename(&raw, DEFAULT_FILE)
    }

    /// Fixed-width table (category printed once per group) followed by the
    /// two advantage lists.
    pub fn render_text(&self) -> String {
        let headers = self.headers();
        let mut lines: Vec<Vec<String>> = Vec::with_capacity(self.result.len());
        for group in self.result.groups() {
            for (i, row) in group.rows.iter().enumerate() {
                let mut cells = self.cells(row);
                if i > 0 {
                    cells[0] = s!();
                }
                lines.push(cells);
            }
        }

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for line in &lines {
            for (w, cell) in widths.iter_mut().zip(line) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = s!();
        let _ = writeln!(out, "{} {} vs {} {}", self.baseline_brand, self.baseline_model,
            self.result.competitor_label, self.competitor_model);
        if let Some((b, c)) = self.origins {
            let _ = writeln!(out, "Data: {} [{}] / {} [{}]", self.baseline_model, b.badge(),
                self.competitor_model, c.badge());
        }
        out.push('\n');

        push_line(&mut out, &headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for line in &lines {
            push_line(&mut out, line, &widths);
        }

        out.push('\n');
        push_summary(&mut out, &format!("{} advantages", self.baseline_brand), &self.baseline_summary());
        out.push('\n');
        push_summary(&mut out, &format!("{} advantages", self.result.competitor_label), &self.competitor_summary());
        out
    }
}

/// First `SUMMARY_LIMIT` entries, or the "none identified" placeholder.
pub fn summary(advantages: &[String]) -> Vec<&str> {
    if advantages.is_empty() {
        return vec![NO_ADVANTAGES];
    }
    advantages.iter().take(SUMMARY_LIMIT).map(String::as_str).collect()
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = s!();
    for (i, (cell, w)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let pad = w.saturating_sub(cell.chars().count());
        line.push_str(cell);
        line.extend(std::iter::repeat_n(' ', pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn push_summary(out: &mut String, title: &str, items: &[&str]) {
    let _ = writeln!(out, "{title}:");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}
