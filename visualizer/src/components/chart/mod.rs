// Chart rendering components
pub mod line_chart;

pub use line_chart::LineChart;
