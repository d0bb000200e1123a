// src/gui/components/summary_cards.rs

use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(report) = app.report() else { return };

    ui.columns(2, |cols| {
        card(&mut cols[0], &format!("{} advantages", report.baseline_brand), &report.baseline_summary());
        card(&mut cols[1], &format!("{} advantages", report.result.competitor_label), &report.competitor_summary());
    });
}

fn card(ui: &mut egui::Ui, title: &str, items: &[&str]) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(title).strong());
        for item in items {
            ui.label(format!("• {item}"));
        }
    });
}
