// src/gui/components/selector_panel.rs
//
// Left panel: baseline series → power, competitor brand → product, the
// live-data toggle and the compare/cache buttons.

use eframe::egui::{self, ComboBox, RichText};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let catalog = app.catalog.clone();
    let manufacturer = catalog.baseline_manufacturer();
    let sel = &mut app.state.options.compare;

    ui.heading(manufacturer);

    // --- Series ---
    let prev_series = sel.series.clone();
    ComboBox::from_id_salt("series")
        .width(200.0)
        .selected_text(label_for(catalog.get_baseline_spec(&sel.series).map(|d| d.name.as_str()), "Select series"))
        .show_ui(ui, |ui| {
            for (id, doc) in catalog.baseline_series() {
                ui.selectable_value(&mut sel.series, s!(id), doc.name.as_str());
            }
        });
    if sel.series != prev_series {
        sel.power = catalog
            .power_options(&sel.series)
            .first()
            .map(|p| p.value.clone())
            .unwrap_or_default();
        logf!("UI: Series → {}", sel.series);
    }

    // --- Power ---
    let powers = catalog.power_options(&sel.series);
    ui.add_enabled_ui(!powers.is_empty(), |ui| {
        let current = powers.iter().find(|p| p.value == sel.power).map(|p| p.label.as_str());
        ComboBox::from_id_salt("power")
            .width(200.0)
            .selected_text(label_for(current, "Select power range"))
            .show_ui(ui, |ui| {
                for p in powers {
                    ui.selectable_value(&mut sel.power, p.value.clone(), p.label.as_str());
                }
            });
    });

    ui.add_space(12.0);
    ui.heading("Competitor");

    // --- Brand ---
    let prev_brand = sel.brand.clone();
    ComboBox::from_id_salt("brand")
        .width(200.0)
        .selected_text(label_for(Some(sel.brand.as_str()).filter(|b| !b.is_empty()), "Select brand"))
        .show_ui(ui, |ui| {
            for brand in catalog.competitor_brands() {
                ui.selectable_value(&mut sel.brand, s!(brand), brand);
            }
        });
    if sel.brand != prev_brand {
        sel.product.clear();
        logf!("UI: Brand → {}", sel.brand);
    }

    // --- Product ---
    let products = catalog.competitor_products(&sel.brand);
    ui.add_enabled_ui(!products.is_empty(), |ui| {
        let current = products.iter().find(|(id, _)| *id == sel.product).map(|(_, d)| d.name.as_str());
        ComboBox::from_id_salt("product")
            .width(200.0)
            .selected_text(label_for(current, "Select product"))
            .show_ui(ui, |ui| {
                for (id, doc) in &products {
                    ui.selectable_value(&mut sel.product, s!(*id), doc.name.as_str());
                }
            });
    });

    ui.add_space(12.0);
    ui.separator();

    // --- Data source ---
    let live_available = app.live.is_some();
    let before = app.state.options.compare.use_live_data;
    ui.add_enabled(
        live_available,
        egui::Checkbox::new(&mut app.state.options.compare.use_live_data, "Use live data"),
    );
    if app.state.options.compare.use_live_data != before {
        let on = app.state.options.compare.use_live_data;
        logf!("UI: use_live_data → {on}");
        app.status(if on {
            "Live data mode enabled - will fetch from manufacturer websites"
        } else {
            "Cached data mode - using local database"
        });
    }
    let mode = if app.state.options.compare.use_live_data { "(Live mode ready)" } else { "(Cached mode)" };
    ui.label(RichText::new(mode).small().weak());

    ui.add_space(8.0);

    // --- Actions ---
    let ready = !app.running && app.state.options.compare.is_complete();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(ready, egui::Button::new(RichText::new("Compare").strong()))
            .on_hover_text("Ctrl+Enter")
            .clicked()
        {
            actions::compare(app);
        }
        if ui
            .add_enabled(ready, egui::Button::new("Refresh"))
            .on_hover_text("Clear cache and compare again (Ctrl+R)")
            .clicked()
        {
            actions::refresh(app);
        }
    });
    if ui.add_enabled(!app.running, egui::Button::new("Clear cache")).clicked() {
        actions::clear_cache(app);
    }

    // --- Cache stats ---
    let stats = app.cache.stats();
    ui.add_space(8.0);
    ui.label(RichText::new(format!("Cached entries: {}", stats.entries)).small());
    if let Some(ts) = stats.last_update {
        let age_min = crate::live::cache::now_ms().saturating_sub(ts) / 60_000;
        ui.label(RichText::new(format!("Last update: {age_min} min ago")).small());
    }
}

fn label_for(text: Option<&str>, placeholder: &str) -> String {
    s!(text.unwrap_or(placeholder))
}
