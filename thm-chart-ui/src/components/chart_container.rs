//! Chart container component that reserves space while data loads.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Optional minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
    pub children: Element,
}

/// Wraps a chart so the page does not jump when the SVG appears.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        div {
            style: "{style}",
            {props.children}
        }
    }
}
