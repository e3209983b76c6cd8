mod app;
mod colors;
mod dialogs;
mod events;
mod file_io;
mod lessons;
mod outcome_ext;
mod progress;
mod settings;
mod state;
mod ui;
mod ui_constants;

use eframe::egui;
use rust_i18n::t;
use state::StudioApp;
use std::sync::Arc;
use tslab_core::{CompilerConfig, ExecutionSandbox};

rust_i18n::i18n!("locales", fallback = "en");

fn main() -> eframe::Result<()> {
    rust_i18n::set_locale("en");

    // One readiness probe and one compiler configuration for the whole
    // process; every playground shares the resulting sandbox.
    let sandbox = ts_bridge::connect(&CompilerConfig::default())
        .map(|services| Arc::new(ExecutionSandbox::new(services)))
        .map_err(|err| err.to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_maximized(true)
            .with_title(t!("window.title").as_ref()),
        ..Default::default()
    };

    eframe::run_native(
        t!("window.title").as_ref(),
        options,
        Box::new(move |cc| {
            let app = StudioApp::new(sandbox);
            rust_i18n::set_locale(&app.settings.language);

            let mut style = (*cc.egui_ctx.style()).clone();
            style.text_styles.insert(
                egui::TextStyle::Body,
                egui::FontId::proportional(app.settings.font_size),
            );
            style.text_styles.insert(
                egui::TextStyle::Button,
                egui::FontId::proportional(app.settings.font_size),
            );
            cc.egui_ctx.set_style(style);

            Ok(Box::new(app))
        }),
    )
}
