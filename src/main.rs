// GUI-subsystem binary: no console window is ever allocated by Windows.
#![windows_subsystem = "windows"]

use eframe::egui;
use thresholdfe::app::ThresholdApp;
use thresholdfe::settings::AppSettings;
use thresholdfe::{i18n, logger};

fn main() -> Result<(), eframe::Error> {
    // Initialize session log (overwrites previous session log)
    logger::init();

    let settings = AppSettings::detect();
    i18n::init();
    i18n::set_language(&settings.language);
    thresholdfe::log_info!("UI language: {}", i18n::current_language());

    let title = i18n::translate("app.title");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(ThresholdApp::new(cc, settings))),
    )
}
