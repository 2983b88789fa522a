// SVG line chart for a ChartSpec, with the price-increase marker
#![allow(non_snake_case)]
use chrono::NaiveDate;
use dioxus::prelude::*;
use shared::models::{ChartPoint, ChartSpec};
use shared::utils::money::format_axis_amount;

use crate::config::theme::ThemePalette;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 50.0;

/// Maps dates and sales amounts into SVG coordinates.
///
/// The x range covers both the plotted dates and the marker date, so the
/// marker is always inside the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub max_sales: f64,
}

impl ChartGeometry {
    /// `None` when there is nothing to plot.
    pub fn for_chart(spec: &ChartSpec, width: f64, height: f64) -> Option<Self> {
        let (first, last) = spec.date_range()?;
        let max_sales = spec.max_sales().unwrap_or(0.0).max(spec.marker.y);
        Some(Self {
            width,
            height,
            start: first.min(spec.marker.date),
            end: last.max(spec.marker.date),
            // All-zero data would divide by zero in y_for
            max_sales: if max_sales > 0.0 { max_sales } else { 1.0 },
        })
    }

    pub fn left(&self) -> f64 {
        MARGIN_LEFT
    }

    pub fn right(&self) -> f64 {
        (self.width - MARGIN_RIGHT).max(MARGIN_LEFT + 1.0)
    }

    pub fn top(&self) -> f64 {
        MARGIN_TOP
    }

    pub fn bottom(&self) -> f64 {
        (self.height - MARGIN_BOTTOM).max(MARGIN_TOP + 1.0)
    }

    pub fn x_for(&self, date: NaiveDate) -> f64 {
        let span_days = (self.end - self.start).num_days().max(1) as f64;
        let offset_days = (date - self.start).num_days() as f64;
        self.left() + offset_days / span_days * (self.right() - self.left())
    }

    pub fn y_for(&self, sales: f64) -> f64 {
        self.bottom() - sales / self.max_sales * (self.bottom() - self.top())
    }

    /// `points` attribute for an SVG polyline.
    pub fn polyline_points(&self, points: &[ChartPoint]) -> String {
        points
            .iter()
            .map(|p| format!("{:.2},{:.2}", self.x_for(p.date), self.y_for(p.sales)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Y positions and labels for `count` evenly spaced horizontal grid lines, from zero to the max.
    pub fn y_ticks(&self, count: usize) -> Vec<(f64, String)> {
        let steps = count.max(2) - 1;
        (0..=steps)
            .map(|i| {
                let value = self.max_sales * i as f64 / steps as f64;
                (self.y_for(value), format_axis_amount(value))
            })
            .collect()
    }
}

#[component]
pub fn LineChart(spec: ChartSpec, width: f64, height: f64, palette: ThemePalette) -> Element {
    let title = spec.title.clone();
    let Some(geometry) = ChartGeometry::for_chart(&spec, width, height) else {
        return rsx! {
            div {
                class: "line-chart line-chart-empty",
                h3 { "{title}" }
                p { "No sales records for the selected region." }
            }
        };
    };

    // Everything below is in SVG space; y grows downward, so sales are flipped in y_for.
    let points = geometry.polyline_points(&spec.points);
    let (left, right, top, bottom) = (geometry.left(), geometry.right(), geometry.top(), geometry.bottom());
    // The marker runs from the selection's peak down to the x axis
    let marker_x = geometry.x_for(spec.marker.date);
    let marker_top = geometry.y_for(spec.marker.y);
    let marker_label_x = marker_x + 6.0;
    let marker_label_y = marker_top + 14.0;
    let marker_label = format!("{} ({})", spec.marker.label, spec.marker.date.format("%d %b %Y"));

    let start_label = geometry.start.format("%Y-%m-%d").to_string();
    let end_label = geometry.end.format("%Y-%m-%d").to_string();
    let x_label = spec.x_label.clone();
    let y_label = spec.y_label.clone();
    let x_label_x = (left + right) / 2.0;
    let x_label_y = height - 10.0;
    let date_label_y = bottom + 18.0;
    let y_label_y = (top + bottom) / 2.0;
    let y_label_transform = format!("rotate(-90 16 {y_label_y})");
    let tick_label_x = left - 8.0;

    let grid_lines = geometry.y_ticks(5).into_iter().map(|(y, label)| {
        let label_y = y + 4.0;
        rsx! {
            line { x1: "{left}", y1: "{y}", x2: "{right}", y2: "{y}", stroke: "{palette.grid}", stroke_width: "1" }
            text { x: "{tick_label_x}", y: "{label_y}", fill: "{palette.foreground}", font_size: "11", text_anchor: "end", "{label}" }
        }
    });

    rsx! {
        div {
            class: "line-chart",
            h3 { style: "text-align: center;", "{title}" }
            svg {
                width: "{width}",
                height: "{height}",
                view_box: "0 0 {width} {height}",
                rect { x: "0", y: "0", width: "{width}", height: "{height}", fill: "{palette.background}" }
                {grid_lines}
                line { x1: "{left}", y1: "{bottom}", x2: "{right}", y2: "{bottom}", stroke: "{palette.foreground}", stroke_width: "1" }
                line { x1: "{left}", y1: "{top}", x2: "{left}", y2: "{bottom}", stroke: "{palette.foreground}", stroke_width: "1" }
                polyline {
                    points: "{points}",
                    fill: "none",
                    stroke: "{palette.sales_line}",
                    stroke_width: "2"
                }
                line {
                    x1: "{marker_x}",
                    y1: "{marker_top}",
                    x2: "{marker_x}",
                    y2: "{bottom}",
                    stroke: "{palette.marker}",
                    stroke_width: "2",
                    stroke_dasharray: "6 4"
                }
                text { x: "{marker_label_x}", y: "{marker_label_y}", fill: "{palette.marker}", font_size: "12", "{marker_label}" }
                text { x: "{left}", y: "{date_label_y}", fill: "{palette.foreground}", font_size: "11", "{start_label}" }
                text { x: "{right}", y: "{date_label_y}", fill: "{palette.foreground}", font_size: "11", text_anchor: "end", "{end_label}" }
                text { x: "{x_label_x}", y: "{x_label_y}", fill: "{palette.foreground}", font_size: "13", text_anchor: "middle", "{x_label}" }
                text { x: "16", y: "{y_label_y}", transform: "{y_label_transform}", fill: "{palette.foreground}", font_size: "13", text_anchor: "middle", "{y_label}" }
            }
        }
    }
}
