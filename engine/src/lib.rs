// Engine library root: formatter, sales table loader and chart builder.

pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;

pub use chart::build_chart;
pub use config::{ChartOptions, EngineSettings};
pub use data::sales_table::SalesTable;
pub use error::{EngineError, Result};
