// Visualizer entry point using Dioxus Desktop
#![allow(non_snake_case)]

use anyhow::Context;
use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use engine::logging::init_logging;
use engine::SalesTable;
use std::sync::Arc;

mod app;
mod components;
mod config;
mod state;

use app::App;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    init_logging("info");

    tracing::info!("Starting Pink Morsel Sales Visualizer (Dioxus Desktop)...");

    let app_config = AppConfig::load_default().context("Failed to load embedded default configuration")?;
    tracing::info!("Loaded default configuration version {}.", app_config.version);

    // Loaded once; the dashboard only ever reads it.
    let table = SalesTable::load(&app_config.data.sales_file).with_context(|| {
        format!(
            "Failed to load sales data from {} (run the formatter first)",
            app_config.data.sales_file.display()
        )
    })?;
    if table.is_empty() {
        tracing::warn!("Sales file {} has no records", app_config.data.sales_file.display());
    }

    // Window title and size come from the embedded config
    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(app_config.app.width, app_config.app.height)),
    );

    // Config and table go in as root context; App reads both with use_context.
    // launch() runs the event loop and does not return.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .with_context(Arc::new(table))
        .launch(App);

    Ok(())
}
