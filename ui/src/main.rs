#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::Arc;

use anyhow::Context as _;
use dormmeal_business::BusinessConfig;
use dormmeal_states::RepaintHook;
use dormmeal_ui::DormmealApp;
use dormmeal_ui::state::State;
use log::info;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    // egui_winit logs every clipboard read it cannot decode; mute it.
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = BusinessConfig::from_env().context("invalid configuration")?;
    info!("Using user API at {}", config.api_url());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("dormmeal-io")
        .build()
        .context("failed to start the tokio runtime")?;
    let _guard = runtime.enter();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Dormmeal Admin")
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let handle = runtime.handle().clone();
    eframe::run_native(
        "Dormmeal Admin",
        native_options,
        Box::new(move |cc| {
            let egui_ctx = cc.egui_ctx.clone();
            let repaint: RepaintHook = Arc::new(move || egui_ctx.request_repaint());
            let state = State::new(config, handle, Some(repaint))?;
            Ok(Box::new(DormmealApp::new(state)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("eframe exited with an error: {err}"))
}
