// src/gui/components/export_bar.rs

use std::path::{Path, PathBuf};

use eframe::egui::{self, Checkbox};
use crate::{
    config::options::ExportFormat,
    file,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");
            ui.selectable_value(&mut fmt, ExportFormat::Text, "Text");

            ui.separator();

            // Text layout always carries its own header line.
            ui.add_enabled(
                file::headers_apply(fmt),
                Checkbox::new(&mut export.include_headers, "Include headers"),
            );
            ui.checkbox(&mut app.state.gui.only_differences, "Only differences");
        });

        if fmt != prev_fmt {
            export.format = fmt;
            logf!("UI: Export format → {:?}", export.format);
        }
    }
    if app.state.options.export.format.ext() != ext_of(&app.state.gui.out_path_text) {
        // If the user hasn't typed, refresh the text field to reflect the new extension.
        app.refresh_out_path_text();
    }

    // --- Output field + actions ---
    let mut open_folder_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.state.gui.out_path_text);
        }

        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_folder_clicked = true;
        }

        let has_result = app.result.is_some();
        if ui.add_enabled(has_result, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(has_result, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });

    if open_folder_clicked {
        app.commit_out_path();
        open_output_folder(app);
    }
}

fn ext_of(text: &str) -> &str {
    Path::new(text).extension().and_then(|e| e.to_str()).unwrap_or("")
}

/// Open the output folder in the system file explorer.
fn open_output_folder(app: &App) {
    let path = app.state.options.export.out_path();
    let folder = path.parent().unwrap_or(Path::new("."));

    let folder_to_open = find_nearest_existing_parent(folder);

    let absolute_folder = match std::fs::canonicalize(&folder_to_open) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            loge!("{}", msg);
            app.status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        loge!("Failed to open folder: {}", e);
        app.status(format!("Failed to open folder: {}", e));
    } else {
        logf!("Opened folder: {}", absolute_folder.display());
    }
}

/// Nearest existing directory at or above `path`; `.` if none.
fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}

fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("explorer")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn explorer: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn open: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn xdg-open: {}", e))?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err(s!("Opening folders not supported on this platform"))
    }
}
