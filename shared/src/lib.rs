// Domain models shared by the formatter engine and the visualizer.
pub mod models;
pub mod utils;
