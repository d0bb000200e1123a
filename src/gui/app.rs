// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex, PoisonError},
    time::Duration,
};

use eframe::egui;

use crate::{
    catalog::Catalog,
    compare::{ComparisonResult, Comparator},
    config::state::AppState,
    live::{cache::SpecCache, LiveFetcher},
    loader::LoadedPair,
    report::Report,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    crate::log::init();
    let catalog = Catalog::load_bundled()?;
    eframe::run_native(
        "VFD Spec Comparison",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(AppState::default(), catalog)))),
    )?;
    Ok(())
}

/// Outcome of one background load.
pub type LoadOutcome = Result<LoadedPair, String>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub catalog: Arc<Catalog>,
    pub live: Option<Arc<LiveFetcher>>,
    pub cache: SpecCache,
    pub comparator: Comparator,

    // last completed comparison
    pub loaded: Option<LoadedPair>,
    pub result: Option<ComparisonResult>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub rx: Option<Receiver<LoadOutcome>>,
}

impl App {
    pub fn new(mut state: AppState, catalog: Catalog) -> Self {
        // Preselect the first series/brand/product so Compare works immediately.
        let sel = &mut state.options.compare;
        if let Some((id, _)) = catalog.baseline_series().next() {
            sel.series = s!(id);
        }
        if let Some(p) = catalog.power_options(&sel.series).first() {
            sel.power = p.value.clone();
        }
        if let Some(brand) = catalog.competitor_brands().next() {
            sel.brand = s!(brand);
        }
        if let Some((id, _)) = catalog.competitor_products(&sel.brand).first() {
            sel.product = s!(*id);
        }

        let live = match LiveFetcher::from_options(&state.options.live, catalog.baseline_manufacturer()) {
            Ok(f) => Some(Arc::new(f)),
            Err(e) => {
                loge!("Init: live fetch unavailable: {e}");
                None
            }
        };
        let cache = match &live {
            Some(f) => f.cache().clone(),
            None => SpecCache::from_options(&state.options.live),
        };

        state.gui.out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        logf!(
            "Init: {} series, {} brand(s), live={}",
            catalog.baseline_series().count(),
            catalog.competitor_brands().count(),
            live.is_some()
        );

        Self {
            state,
            catalog: Arc::new(catalog),
            live,
            cache,
            comparator: Comparator::default(),
            loaded: None,
            result: None,
            status: Arc::new(Mutex::new(s!("Select products and press Compare"))),
            running: false,
            rx: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Report over the last comparison, if there is one.
    pub fn report(&self) -> Option<Report<'_>> {
        let pair = self.loaded.as_ref()?;
        let result = self.result.as_ref()?;
        Some(Report::from_pair(self.catalog.baseline_manufacturer(), pair, result))
    }

    /// Push the text field into ExportOptions if the user edited it.
    pub fn commit_out_path(&mut self) {
        if self.state.gui.out_path_dirty {
            self.state.options.export.set_path(&self.state.gui.out_path_text);
            logf!("Export: Out path set → {}", self.state.options.export.out_path().display());
            self.state.gui.out_path_dirty = false;
        }
    }

    pub fn refresh_out_path_text(&mut self) {
        if !self.state.gui.out_path_dirty {
            self.state.gui.out_path_text =
                self.state.options.export.out_path().to_string_lossy().into_owned();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let (compare, refresh) = ctx.input(|i| {
            let cmd = i.modifiers.command;
            (cmd && i.key_pressed(egui::Key::Enter), cmd && i.key_pressed(egui::Key::R))
        });
        if refresh {
            actions::refresh(self);
        } else if compare {
            actions::compare(self);
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.running {
                    ui.add(egui::widgets::Spinner::new());
                }
                ui.label(self.status_text());
            });
        });

        egui::SidePanel::left("selectors")
            .resizable(false)
            .show(ctx, |ui| {
                components::selector_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::export_bar::draw(ui, self);

            ui.separator();

            if self.result.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.label("No comparison yet.");
                });
                return;
            }

            components::summary_cards::draw(ui, self);

            ui.separator();

            components::comparison_table::draw(ui, self);
        });
    }
}
