//! SVG year x month grid drawn from a `RenderedHeatmap`.
//!
//! Each cell is a group holding the filled rectangle, the optional
//! sparklines and a transparent hit area on top that drives the tooltip.

use crate::state::{AppState, Hover};
use dioxus::prelude::*;
use thm_core::heatmap::{RenderedCell, RenderedHeatmap};

/// Length of axis tick marks.
const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
const TICK_PADDING: f64 = 3.0;

#[derive(Props, Clone, PartialEq)]
pub struct HeatmapChartProps {
    pub heatmap: RenderedHeatmap,
}

#[component]
pub fn HeatmapChart(props: HeatmapChartProps) -> Element {
    let heatmap = props.heatmap;
    let (x0, x1) = heatmap.x_range;
    let (y0, y1) = heatmap.y_range;
    let label_offset = TICK_SIZE + TICK_PADDING;

    rsx! {
        svg {
            width: "{heatmap.width}",
            height: "{heatmap.height}",
            "font-family": "sans-serif",

            // top axis: years
            g {
                transform: "translate(0,{y0})",
                "font-size": "10",
                "text-anchor": "middle",
                path {
                    d: "M{x0},-{TICK_SIZE}V0H{x1}V-{TICK_SIZE}",
                    fill: "none",
                    stroke: "currentColor",
                }
                for tick in heatmap.year_ticks.iter() {
                    g {
                        key: "year-{tick.label}",
                        transform: "translate({tick.position},0)",
                        line { y2: "-{TICK_SIZE}", stroke: "currentColor" }
                        text { y: "-{label_offset}", fill: "currentColor", "{tick.label}" }
                    }
                }
            }

            // left axis: months
            g {
                transform: "translate({x0},0)",
                "font-size": "10",
                "text-anchor": "end",
                path {
                    d: "M-{TICK_SIZE},{y0}H0V{y1}H-{TICK_SIZE}",
                    fill: "none",
                    stroke: "currentColor",
                }
                for tick in heatmap.month_ticks.iter() {
                    g {
                        key: "month-{tick.label}",
                        transform: "translate(0,{tick.position})",
                        line { x2: "-{TICK_SIZE}", stroke: "currentColor" }
                        text { x: "-{label_offset}", "dy": "0.32em", fill: "currentColor", "{tick.label}" }
                    }
                }
            }

            for cell in heatmap.cells.iter() {
                HeatmapCell { key: "{cell.year}-{cell.month}", cell: cell.clone() }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct HeatmapCellProps {
    cell: RenderedCell,
}

#[component]
fn HeatmapCell(props: HeatmapCellProps) -> Element {
    let mut state = use_context::<AppState>();
    let cell = props.cell;
    let rect = cell.rect;
    let tooltip = cell.tooltip.clone();

    let on_enter = move |evt: MouseEvent| {
        let point = evt.page_coordinates();
        state.hover.set(Some(Hover {
            text: tooltip.clone(),
            page_x: point.x,
            page_y: point.y,
        }));
    };
    let on_leave = move |_: MouseEvent| state.hover.set(None);

    rsx! {
        g {
            transform: "translate({rect.x},{rect.y})",
            rect {
                width: "{rect.width}",
                height: "{rect.height}",
                fill: "{cell.fill}",
            }
            if let Some(spark) = cell.sparkline.as_ref() {
                path {
                    d: "{spark.min_path}",
                    fill: "none",
                    stroke: "{spark.min_stroke}",
                    "stroke-width": "{spark.stroke_width}",
                    style: "pointer-events: none;",
                }
                path {
                    d: "{spark.max_path}",
                    fill: "none",
                    stroke: "{spark.max_stroke}",
                    "stroke-width": "{spark.stroke_width}",
                    style: "pointer-events: none;",
                }
            }
            rect {
                width: "{rect.width}",
                height: "{rect.height}",
                fill: "transparent",
                onmouseenter: on_enter,
                onmouseleave: on_leave,
            }
        }
    }
}
