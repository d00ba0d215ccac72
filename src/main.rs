mod app;
mod cli;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Result;
use clap::Parser;
use eframe::egui;

use app::VolcanoExplorerApp;
use cli::Args;
use config::ExplorerConfig;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ExplorerConfig::from_path(path)?,
        None => ExplorerConfig::default(),
    };

    let mut state = AppState::new(config);
    if let Some(path) = &args.dataset {
        state.load_path(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "🌋 Volcano Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(VolcanoExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
