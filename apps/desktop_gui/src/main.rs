use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{load_settings, HttpClassifierClient};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent, orchestration::InteractionController, presentation::TITLE,
};
use crate::ui::{theme::apply_light_visuals, MoodScreenApp};

#[derive(Parser, Debug)]
#[command(about = "Screens free-form text with a remote classification service")]
struct Args {
    /// Settings file (defaults to ./mood_screen.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the classification endpoint from the settings file and environment.
    #[arg(long)]
    endpoint_url: Option<String>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    let mut settings =
        load_settings(args.config.as_deref()).context("failed to load client settings")?;
    if let Some(endpoint_url) = &args.endpoint_url {
        settings = settings
            .with_endpoint(endpoint_url)
            .context("invalid --endpoint-url")?;
    }
    tracing::info!(
        endpoint = %settings.endpoint_url,
        timeout_secs = settings.request_timeout.as_secs(),
        "starting mood_screen"
    );

    let client = HttpClassifierClient::new(&settings).context("failed to build http client")?;
    let endpoint_label = client.endpoint_url().to_string();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, Arc::new(client));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([760.0, 720.0])
            .with_min_inner_size([480.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| {
            apply_light_visuals(&cc.egui_ctx);
            Ok(Box::new(MoodScreenApp::new(
                InteractionController::new(cmd_tx),
                ui_rx,
                endpoint_label,
            )))
        }),
    )
    .map_err(|err| anyhow!("window event loop failed: {err}"))
}
