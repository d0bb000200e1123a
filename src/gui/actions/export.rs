// src/gui/actions/export.rs
use crate::{gui::app::App, file};

pub fn export(app: &mut App) {
    if app.result.is_none() {
        app.status("Nothing to export");
        logd!("Export: Clicked, but there's nothing to export");
        return;
    }
    app.commit_out_path();

    let res = {
        let Some(report) = app.report() else { return };
        logf!(
            "Export: Begin rows={}, format={:?}, headers={}",
            report.result.len(),
            app.state.options.export.format,
            app.state.options.export.include_headers
        );
        file::export_comparison(&app.state.options.export, &report, app.state.gui.only_differences)
    };

    match res {
        Ok(path) => {
            logf!("Export: OK {}", path.display());
            app.status(format!("Exported to {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
