// Dashboard state: the selected region and the chart built for it.
// The sales table is loaded once in main.rs and handed in; nothing here is global.

use engine::{build_chart, ChartOptions, SalesTable};
use shared::models::{ChartSpec, ParseFilterError, Region, RegionFilter};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    table: Arc<SalesTable>,
    options: ChartOptions,
    filter: RegionFilter,
    chart: ChartSpec,
}

impl Dashboard {
    /// Starts on "all" with the chart already built.
    pub fn new(table: Arc<SalesTable>, options: ChartOptions) -> Self {
        let filter = RegionFilter::All;
        let chart = build_chart(&table, filter, &options);
        Self { table, options, filter, chart }
    }

    pub fn filter(&self) -> RegionFilter {
        self.filter
    }

    pub fn chart(&self) -> &ChartSpec {
        &self.chart
    }

    pub fn table(&self) -> &SalesTable {
        &self.table
    }

    /// Rebuilds the chart for `filter`, replacing the previous one outright.
    pub fn select(&mut self, filter: RegionFilter) -> &ChartSpec {
        tracing::debug!(from = %self.filter, to = %filter, "Region selector changed");
        self.filter = filter;
        self.chart = build_chart(&self.table, filter, &self.options);
        &self.chart
    }

    /// Like `select`, from the selector's text value. Unknown values leave the state as it was.
    pub fn select_value(&mut self, value: &str) -> Result<&ChartSpec, ParseFilterError> {
        let filter = value.parse::<RegionFilter>()?;
        Ok(self.select(filter))
    }
}

/// One entry of the region dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorOption {
    pub value: RegionFilter,
    pub label: &'static str,
}

pub fn selector_options() -> Vec<SelectorOption> {
    std::iter::once(SelectorOption { value: RegionFilter::All, label: "All Regions" })
        .chain(Region::ALL.iter().map(|region| SelectorOption {
            value: RegionFilter::Only(*region),
            label: region.display_name(),
        }))
        .collect()
}
