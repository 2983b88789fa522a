// GUI configuration module
pub mod theme;

use engine::config::ChartOptions;
use serde::Deserialize;
use std::path::PathBuf;

use theme::{Theme, ThemePalette};

/// Mirrors `assets/config/default.json`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub data: DataSettings,
    pub dashboard: DashboardText,
    pub plot: PlotSize,
    #[serde(default)]
    pub chart: ChartOptions,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub theme: String, // "dark" or "light"
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DataSettings {
    pub sales_file: PathBuf, // Written by the formatter
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardText {
    pub header: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct PlotSize {
    pub width: f64,
    pub height: f64,
}

impl AppConfig {
    /// The configuration embedded in the binary.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json_str(config_str)
    }

    pub fn from_json_str(json: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.app.theme.parse::<Theme>()?;
        if config.plot.width <= 0.0 || config.plot.height <= 0.0 {
            anyhow::bail!("Plot size must be positive, got {}x{}", config.plot.width, config.plot.height);
        }
        Ok(config)
    }

    pub fn palette(&self) -> ThemePalette {
        // Validated in from_json_str
        ThemePalette::for_theme(self.app.theme.parse().unwrap_or(Theme::Light))
    }
}
