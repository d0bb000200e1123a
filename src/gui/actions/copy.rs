// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let txt = {
        let Some(report) = app.report() else {
            app.status("Nothing to copy");
            logd!("Copy: Clicked, but there's nothing to copy");
            return;
        };
        logf!("Copy: rows={}, format={:?}", report.result.len(), app.state.options.export.format);
        file::export_string(&app.state.options.export, &report, app.state.gui.only_differences)
    };

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
