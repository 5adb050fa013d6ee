//! Horizontal colour legend for the heatmap.

use dioxus::prelude::*;
use thm_core::legend::{Legend, LEGEND_SHAPE_WIDTH};

const SWATCH_HEIGHT: f64 = 15.0;

#[derive(Props, Clone, PartialEq)]
pub struct ColorLegendProps {
    pub legend: Legend,
}

#[component]
pub fn ColorLegend(props: ColorLegendProps) -> Element {
    let legend = props.legend;
    let width = (legend.width() + 40.0).max(600.0);
    let label_x = LEGEND_SHAPE_WIDTH / 2.0;
    let label_y = SWATCH_HEIGHT + 15.0;

    rsx! {
        svg {
            width: "{width}",
            height: "100",
            "font-family": "sans-serif",
            g {
                transform: "translate(20,20)",
                text { "font-size": "12", "{legend.title}" }
                g {
                    transform: "translate(0,12)",
                    for swatch in legend.swatches.iter() {
                        g {
                            key: "{swatch.offset}",
                            transform: "translate({swatch.offset},0)",
                            rect {
                                width: "{LEGEND_SHAPE_WIDTH}",
                                height: "{SWATCH_HEIGHT}",
                                fill: "{swatch.color}",
                            }
                            if let Some(label) = swatch.label {
                                text {
                                    x: "{label_x}",
                                    y: "{label_y}",
                                    "text-anchor": "middle",
                                    "font-size": "10",
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
