// src/gui/actions/compare.rs
use std::{sync::mpsc, thread};

use crate::{
    gui::{app::App, progress::GuiProgress},
    loader::Loader,
    report::Report,
};

/// Start a background load for the current selection. Ignored while one
/// is already running.
pub fn compare(app: &mut App) {
    if app.running {
        return;
    }
    let opts = app.state.options.compare.clone();
    if !opts.is_complete() {
        app.status("Please select both products to compare");
        return;
    }

    logf!(
        "Compare: Begin {} vs {} {} (live={})",
        opts.series, opts.brand, opts.product, opts.use_live_data
    );

    let catalog = app.catalog.clone();
    let live = app.live.clone();
    let mut prog = GuiProgress::new(app.status.clone());
    let (tx, rx) = mpsc::channel();

    app.running = true;
    app.rx = Some(rx);
    app.status("Loading product data...");

    // → This is where the fetch happens ←
    thread::spawn(move || {
        let outcome = Loader::new(&catalog, live.as_deref())
            .load(&opts, Some(&mut prog))
            .map_err(|e| e.to_string());
        let _ = tx.send(outcome);
    });
}

/// Clear the live cache, then compare again.
pub fn refresh(app: &mut App) {
    if app.running {
        return;
    }
    app.cache.clear();
    compare(app);
}

pub fn clear_cache(app: &mut App) {
    app.cache.clear();
    app.status("Cache cleared. Live data will be fetched on next comparison.");
}

/// Pick up a finished background load, if any.
pub fn poll(app: &mut App) {
    let Some(rx) = app.rx.as_ref() else { return };
    let outcome = match rx.try_recv() {
        Ok(o) => o,
        Err(mpsc::TryRecvError::Empty) => return,
        Err(mpsc::TryRecvError::Disconnected) => Err(s!("Loader thread ended without a result")),
    };
    app.rx = None;
    app.running = false;

    match outcome {
        Ok(pair) => {
            let result = pair.compare(&app.comparator);
            logf!(
                "Compare: OK rows={} baseline_adv={} competitor_adv={}",
                result.len(),
                result.baseline_advantages.len(),
                result.competitor_advantages.len()
            );
            let stem = Report::from_pair(app.catalog.baseline_manufacturer(), &pair, &result).export_stem();
            app.state.options.export.suggest_stem(&stem);
            app.refresh_out_path_text();

            app.loaded = Some(pair);
            app.result = Some(result);
        }
        Err(e) => {
            loge!("Compare: Error: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
