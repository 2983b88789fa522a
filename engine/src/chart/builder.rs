// Builds the sales line chart for a region filter
use shared::models::{ChartPoint, ChartSpec, PriceMarker, RegionFilter};

use crate::config::ChartOptions;
use crate::data::sales_table::SalesTable;

/// Pure: the same table, filter and options always give the same chart.
///
/// Points follow the table's date order. The marker sits at `options.marker_date`
/// and reaches the highest plotted sales value (0.0 when nothing is plotted).
pub fn build_chart(table: &SalesTable, filter: RegionFilter, options: &ChartOptions) -> ChartSpec {
    let points: Vec<ChartPoint> = table
        .filtered(filter)
        .map(|r| ChartPoint { date: r.date, sales: r.sales })
        .collect();

    // Marker height tracks the current selection, not the whole table
    let peak = points.iter().map(|p| p.sales).fold(0.0, f64::max);

    let title = match filter {
        RegionFilter::All => options.title.clone(),
        RegionFilter::Only(region) => format!("{} ({})", options.title, region.display_name()),
    };

    ChartSpec {
        title,
        x_label: options.x_label.clone(),
        y_label: options.y_label.clone(),
        filter,
        points,
        marker: PriceMarker {
            date: options.marker_date,
            label: options.marker_label.clone(),
            y: peak,
        },
    }
}
