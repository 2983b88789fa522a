// GUI components module
pub mod chart;
pub mod region_selector;

pub use chart::LineChart;
pub use region_selector::{RegionSelector, REGION_SELECTOR_ID};
