//! Monthly Temperature Extremes Heatmap
//!
//! One cell per (year, month), coloured by the month's highest daily maximum
//! or lowest daily minimum. A radio toggle switches between the two; hovering
//! a cell shows both values.
//!
//! Data flow:
//! 1. `build.rs` resolves the dataset URL (`THM_DATA_URL` or the default).
//! 2. On mount: fetch the CSV, parse it and aggregate it into a `Heatmap`.
//! 3. On mode change: re-render the cell model; the layout stays put.
//!
//! The first year of the dataset is left out of the grid (it only covers the
//! last days of 1996), but its rows still count toward the colour domain.

use dioxus::prelude::*;
use thm_chart_ui::components::{
    ChartContainer, ChartHeader, ColorLegend, HeatmapChart, LoadingSpinner, ModeToggle, Tooltip,
};
use thm_chart_ui::loader;
use thm_chart_ui::state::AppState;
use thm_core::heatmap::{HeatmapConfig, RenderedHeatmap};

/// Where the daily temperature CSV lives, resolved at build time.
const DATA_URL: &str = include_str!(concat!(env!("OUT_DIR"), "/data_url.txt"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("monthly-extremes-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect: fetch and aggregate once on mount ───
    use_effect(move || {
        spawn(async move {
            match loader::load_heatmap(DATA_URL, HeatmapConfig::monthly_extremes()).await {
                Ok(heatmap) => state.heatmap.set(Some(heatmap)),
                // nothing is drawn on failure
                Err(e) => log::error!("Failed to load temperature data: {:#}", e),
            }
            state.loading.set(false);
        });
    });

    // Re-rendered whenever the mode flips.
    let rendered = use_memo(move || -> Option<RenderedHeatmap> {
        let mode = (state.mode)();
        state.heatmap.read().as_ref().map(|heatmap| heatmap.render(mode))
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if *state.loading.read() {
                LoadingSpinner { source: DATA_URL.trim().to_string() }
            } else if let Some(heatmap) = rendered() {
                ChartHeader {
                    year_span: heatmap.year_span,
                    title: "Monthly Temperature Extremes".to_string(),
                    unit_description: "Degrees Celsius, highest daily max or lowest daily min of the month".to_string(),
                }

                ModeToggle {}

                ChartContainer {
                    min_height: 500,
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
