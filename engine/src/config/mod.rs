pub mod settings;

pub use settings::{ChartOptions, EngineSettings, SETTINGS_FILE};
