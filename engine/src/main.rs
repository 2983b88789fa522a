// Formatter entry point: raw daily sales files in, one normalized sales file out
use anyhow::Context;
use engine::config::{EngineSettings, SETTINGS_FILE};
use engine::data::formatter;
use engine::logging::init_logging;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging("info");

    // Optional formatter.json in the working directory; defaults otherwise
    let settings = EngineSettings::load_or_default(SETTINGS_FILE)
        .with_context(|| format!("Failed to load settings from {}", SETTINGS_FILE))?;

    // Any bad input aborts before the output file is written
    let summary = formatter::run(&settings).context("Formatting sales data failed")?;

    info!(
        "Formatted CSV created successfully: {} records from {} files at {}",
        summary.records_written,
        summary.files_read,
        summary.output.display()
    );
    Ok(())
}
