//! GUI entry point for RoadCost

mod app;
mod calculator_panel;

use app::RoadCostApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 760.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "RoadCost",
        options,
        Box::new(|cc| Ok(Box::new(RoadCostApp::new(cc)))),
    )
}
