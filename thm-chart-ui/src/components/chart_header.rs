//! Page title with the covered year range and what the colour encodes.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// First and last year on the grid, from `RenderedHeatmap::year_span`
    #[props(default)]
    pub year_span: Option<(i32, i32)>,
    /// What the cell colour means (e.g., "Degrees Celsius")
    #[props(default = String::new())]
    pub unit_description: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let years = match props.year_span {
        Some((first, last)) if first == last => first.to_string(),
        Some((first, last)) => format!("{} to {}", first, last),
        None => String::new(),
    };

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
                if !years.is_empty() {
                    span {
                        style: "margin-left: 8px; font-weight: normal; color: #666;",
                        "({years})"
                    }
                }
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Colour: {props.unit_description}"
                }
            }
        }
    }
}
