#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::SalesTable;
use std::sync::Arc;

use crate::components::{LineChart, RegionSelector};
use crate::config::AppConfig;
use crate::state::Dashboard;

/// DOM id of the chart container.
pub const SALES_GRAPH_ID: &str = "sales_graph";

#[component]
pub fn App() -> Element {
    // Both provided by main.rs at launch
    let config = use_context::<AppConfig>();
    let table = use_context::<Arc<SalesTable>>();

    let chart_options = config.chart.clone();
    let mut dashboard = use_signal(move || Dashboard::new(table, chart_options));

    let on_select = move |value: String| {
        if let Err(e) = dashboard.write().select_value(&value) {
            tracing::warn!("Ignoring selector value: {}", e);
        }
    };

    let palette = config.palette();
    let header = config.dashboard.header.clone();
    let description = config.dashboard.description.clone();
    let page_style = format!(
        "font-family: sans-serif; padding: 16px; background: {}; color: {};",
        palette.background, palette.foreground
    );

    // Copy what the view needs out of the signal so the read guard is dropped before rsx
    let (selected, chart, record_count) = {
        let state = dashboard.read();
        (state.filter(), state.chart().clone(), state.table().len())
    };
    let shown_count = chart.points.len();

    rsx! {
        div {
            class: "dashboard",
            style: "{page_style}",
            h1 { style: "text-align: center;", "{header}" }
            p { style: "text-align: center;", "{description}" }
            RegionSelector { selected: selected, on_select: on_select }
            div {
                id: SALES_GRAPH_ID,
                style: "display: flex; justify-content: center;",
                LineChart {
                    spec: chart,
                    width: config.plot.width,
                    height: config.plot.height,
                    palette: palette.clone()
                }
            }
            p {
                style: "text-align: center; font-size: 12px;",
                "Showing {shown_count} of {record_count} records"
            }
        }
    }
}
