// src/gui/components/comparison_table.rs
//
// Header line (models + data-source badges) and the comparison grid.
// Purely a view over App::loaded / App::result.

use eframe::egui::{self, Color32, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{compare::Verdict, gui::app::App, loader::Origin};

const BASELINE_RED: Color32 = Color32::from_rgb(0xE2, 0x00, 0x0F);
const COMPETITOR_BLUE: Color32 = Color32::from_rgb(0x3C, 0x8C, 0xDC);
const LIVE_GREEN: Color32 = Color32::from_rgb(0x2E, 0xA0, 0x43);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let only_differences = app.state.gui.only_differences;
    let Some(report) = app.report() else { return };

    if let Some((b, c)) = report.origins {
        ui.horizontal(|ui| {
            ui.label(RichText::new(report.baseline_model).strong());
            source_badge(ui, b);
            ui.label("vs");
            ui.label(RichText::new(report.competitor_model).strong());
            source_badge(ui, c);
        });
    }

    // Same visible rows as export; category only on the first row of a run.
    let rows: Vec<(bool, &crate::compare::ComparisonRow)> = {
        let mut last: Option<&str> = None;
        report
            .result
            .rows
            .iter()
            .filter(|r| !only_differences || r.verdict != Verdict::Equal)
            .map(|r| {
                let first = last != Some(r.category.as_str());
                last = Some(r.category.as_str());
                (first, r)
            })
            .collect()
    };
    let headers = report.headers();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::initial(150.0).resizable(true).clip(true))
        .column(Column::initial(220.0).resizable(true).clip(true))
        .column(Column::initial(220.0).resizable(true).clip(true))
        .column(Column::initial(220.0).resizable(true).clip(true))
        .column(Column::remainder().at_least(90.0))
        .header(24.0, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(22.0, rows.len(), |mut row| {
                let Some(&(first, r)) = rows.get(row.index()) else { return };
                row.col(|ui| {
                    if first {
                        ui.label(RichText::new(&r.category).strong());
                    }
                });
                for text in [&r.spec_name, &r.baseline_value, &r.competitor_value] {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.label(text.as_str()).on_hover_text(text.as_str());
                    });
                }
                row.col(|ui| {
                    let color = match r.verdict {
                        Verdict::Baseline => BASELINE_RED,
                        Verdict::Competitor => COMPETITOR_BLUE,
                        Verdict::Equal => ui.visuals().weak_text_color(),
                    };
                    ui.label(RichText::new(report.badge(r.verdict)).color(color).strong());
                });
            });
        });
}

fn source_badge(ui: &mut egui::Ui, origin: Origin) {
    let color = match origin {
        Origin::Live => LIVE_GREEN,
        Origin::Static => ui.visuals().weak_text_color(),
    };
    ui.label(RichText::new(format!("[{}]", origin.badge())).small().color(color));
}
