// Formatter and chart settings, loaded from an optional JSON file
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};

/// File the formatter looks for in the working directory.
pub const SETTINGS_FILE: &str = "formatter.json";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub data_dir: PathBuf,
    pub output_path: PathBuf,
    pub product: String,         // Matched case-insensitively
    pub currency_symbol: String, // Stripped from the front of raw prices
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            data_dir: PathBuf::from("./data"),
            output_path: PathBuf::from("./formatted_data.csv"),
            product: "pink morsel".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl EngineSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: EngineSettings =
            serde_json::from_str(json).map_err(|e| EngineError::Config(format!("invalid settings: {}", e)))?;
        if settings.product.trim().is_empty() {
            return Err(EngineError::Config("'product' must not be empty".to_string()));
        }
        Ok(settings)
    }

    /// Reads `path` if it exists; a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json_str(&json),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(EngineError::io(path, e)),
        }
    }
}

/// Labels and the annotated pricing event for the sales chart.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChartOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub marker_date: NaiveDate,
    pub marker_label: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            title: "Pink Morsel Sales Over Time".to_string(),
            x_label: "Date".to_string(),
            y_label: "Sales ($)".to_string(),
            marker_date: NaiveDate::from_ymd_opt(2021, 1, 15).unwrap_or(NaiveDate::MIN),
            marker_label: "Price increase".to_string(),
        }
    }
}
