#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Entry point kept minimal: logger, news store, host detection and window
// config. Everything else lives in the app module (src/app.rs).

use eframe::{egui, egui_wgpu::WgpuConfiguration};

mod app;
mod logger;
mod news;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();

    let store = match news::NewsStore::load() {
        Ok(store) => store,
        Err(e) => {
            // Startup invariant violation: nothing to show, bail out.
            log::error!("news store failed to load: {}", e);
            std::process::exit(1);
        }
    };
    let host = types::HostCapability::detect();
    log::info!(
        "host capability: input={} browser={:?}",
        host.input,
        host.browser
    );

    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        wgpu_options: WgpuConfiguration::default(),
        viewport: egui::ViewportBuilder::default()
            .with_title("The Gist")
            .with_inner_size([420.0, 800.0])
            .with_min_inner_size([320.0, 560.0])
            .with_resizable(true),
        ..Default::default()
    };
    eframe::run_native(
        "The Gist",
        native_options,
        Box::new(move |cc| Box::new(app::GistApp::new(cc, store, host))),
    )
}
