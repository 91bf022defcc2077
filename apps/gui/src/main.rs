 // hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod backend;
mod cli;
mod component;
mod config;
mod constants;
mod error;
mod ui;
mod util;

use clap::Parser;
use error::WrapErr;
use tracing_subscriber::EnvFilter;

fn main() -> error::Result<()> {
    color_eyre::install()?;

    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let mut config = config::Config::load().wrap_err("Failed to load configuration")?;
    cli.apply(&mut config);
    tracing::info!("Using configuration at {}", config.config_path.display());

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.app.width, config.app.height])
        .with_min_inner_size([constants::MIN_WINDOW_WIDTH, constants::MIN_WINDOW_HEIGHT])
        .with_title(constants::WINDOW_TITLE)
        .with_transparent(config.app.background_alpha < 1.0)
         // Wayland user can use app-id to customize window's behavior
        .with_app_id(constants::APP_ID);

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    let initial_search = cli.query.unwrap_or_default();
    eframe::run_native(
        constants::APP_ID,
        options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, config, initial_search)))),
    )
    .map_err(|e| error::error!("Failed to run the viewer: {e}"))
}

/// `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
