mod app;
mod color;
mod state;
mod ui;

use app::RustyRunwayApp;
use clap::Parser;
use eframe::egui;
use rusty_runway::config::Settings;

fn main() -> eframe::Result {
    env_logger::init();

    let settings = Settings::parse();
    log::info!("Using data file {}", settings.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Runway – New England Airports",
        options,
        Box::new(move |_cc| Ok(Box::new(RustyRunwayApp::new(settings)))),
    )
}
