//! Last Decade of Daily Temperatures
//!
//! The ten most recent years of the dataset as a year x month grid. Each cell
//! is coloured by the selected field and carries two sparklines, daily
//! minimum and daily maximum, scaled to that month's own range so the shape of
//! every month is visible regardless of season.
//!
//! Unlike the monthly extremes page the colour domain follows the mode: in
//! min mode the scale spans the daily minima only.
//!
//! Data flow:
//! 1. `build.rs` resolves the dataset URL (`THM_DATA_URL` or the default).
//! 2. On mount: fetch, parse, keep the last ten years and group the days of
//!    each month.
//! 3. On mode change: recolour cells and sparklines; the layout stays put.

use dioxus::prelude::*;
use thm_chart_ui::components::{
    ChartContainer, ChartHeader, ColorLegend, HeatmapChart, LoadingSpinner, ModeToggle, Tooltip,
};
use thm_chart_ui::loader;
use thm_chart_ui::state::AppState;
use thm_core::heatmap::{HeatmapConfig, RenderedHeatmap};
use thm_core::sparkline::strokes;

/// Where the daily temperature CSV lives, resolved at build time.
const DATA_URL: &str = include_str!(concat!(env!("OUT_DIR"), "/data_url.txt"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("decade-sparklines-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        spawn(async move {
            match loader::load_heatmap(DATA_URL, HeatmapConfig::decade_sparklines()).await {
                Ok(heatmap) => state.heatmap.set(Some(heatmap)),
                Err(e) => log::error!("Failed to load temperature data: {:#}", e),
            }
            state.loading.set(false);
        });
    });

    let rendered = use_memo(move || -> Option<RenderedHeatmap> {
        let mode = (state.mode)();
        state.heatmap.read().as_ref().map(|heatmap| heatmap.render(mode))
    });

    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if *state.loading.read() {
                LoadingSpinner { source: DATA_URL.trim().to_string() }
            } else if let Some(heatmap) = rendered() {
                ChartHeader {
                    year_span: heatmap.year_span,
                    title: "Daily Temperatures, Last Ten Years".to_string(),
                    unit_description: "Degrees Celsius, monthly extreme of the selected field".to_string(),
                }

                ModeToggle { show_label: false }
                SparklineKey {}

                ChartContainer {
                    min_height: 600,
                    HeatmapChart { heatmap: heatmap.clone() }
                }

                if let Some(legend) = heatmap.legend.clone() {
                    div {
                        id: "legend",
                        ColorLegend { legend }
                    }
                }

                Tooltip {}
            }
        }
    }
}

/// Explains the two sparkline colours for the current mode.
#[component]
fn SparklineKey() -> Element {
    let state = use_context::<AppState>();
    let (min_stroke, max_stroke) = strokes((state.mode)());

    rsx! {
        p {
            style: "margin: 0 0 8px 0; font-size: 12px; color: #444;",
            span { style: "color: {max_stroke}; font-weight: bold;", "━ daily max" }
            "  "
            span { style: "color: {min_stroke}; font-weight: bold;", "━ daily min" }
        }
    }
}
