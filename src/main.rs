mod app;
mod charts;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Result;
use app::NobelApp;
use config::LoaderConfig;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    // Load → clean → derive before the window opens; any failure aborts here.
    let dataset = data::build_dataset(&LoaderConfig::default())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 1000.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Nobel Laureates",
        options,
        Box::new(|_cc| Ok(Box::new(NobelApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}
