// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod model;
mod net;
mod settings;
mod state;
mod ui;
mod view;

use app::ChemVisualizerApp;
use settings::Settings;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load()?;
    tracing::info!(api_base_url = %settings.api_base_url, "starting ChemVisualizer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Chemical Equipment Visualizer"),
        ..Default::default()
    };

    eframe::run_native(
        "ChemVisualizer",
        options,
        Box::new(move |_cc| Box::new(ChemVisualizerApp::new(settings))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
