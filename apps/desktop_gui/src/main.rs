use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::{load_settings, HttpEmployeeGateway};
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::DesktopGuiApp;

#[derive(Parser, Debug)]
#[command(name = "employee-records", about = "Desktop viewer for the employee records API")]
struct Args {
    /// Base URL of the employee API; overrides the settings file and environment.
    #[arg(long)]
    api_base: Option<String>,
    /// Settings file to read instead of the default locations.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let settings = load_settings(args.config.as_deref(), args.api_base.as_deref())?;
    tracing::info!(api_base = %settings.api_base, "starting employee records desktop");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, HttpEmployeeGateway::from_settings(&settings));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Records")
            .with_inner_size([1180.0, 760.0])
            .with_min_inner_size([860.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Employee Records",
        options,
        Box::new(move |_cc| Ok(Box::new(DesktopGuiApp::bootstrap(cmd_tx, ui_rx, &settings)))),
    )
    .map_err(|err| anyhow!("desktop shell exited with error: {err}"))
}
